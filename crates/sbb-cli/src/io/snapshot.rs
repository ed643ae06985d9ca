// crates/sbb-cli/src/io/snapshot.rs

use anyhow::Context;

const MAGIC: &[u8; 4] = b"SBB1";
const HEADER_LEN: usize = 4 + 4 + 4 + 8 + 4;

/// Raw quantized history exported from a buffer, newest sample first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub range_min: i32,
    pub range_max: i32,
    pub interval_ms: u64,
    pub codes: Vec<u8>,
}

/// .sbb layout (little-endian):
/// MAGIC[4]
/// range_min:i32
/// range_max:i32
/// interval_ms:u64
/// count:u32
/// codes[count]
/// crc32:u32           (over everything before crc32)
pub fn encode(snap: &Snapshot) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + snap.codes.len() + 4);
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&snap.range_min.to_le_bytes());
    out.extend_from_slice(&snap.range_max.to_le_bytes());
    out.extend_from_slice(&snap.interval_ms.to_le_bytes());
    out.extend_from_slice(&(snap.codes.len() as u32).to_le_bytes());
    out.extend_from_slice(&snap.codes);

    let crc = crc32(&out);
    out.extend_from_slice(&crc.to_le_bytes());
    out
}

pub fn decode(bytes: &[u8]) -> anyhow::Result<Snapshot> {
    if bytes.len() < HEADER_LEN + 4 {
        anyhow::bail!("snapshot too small");
    }
    if &bytes[0..4] != MAGIC {
        anyhow::bail!("bad snapshot magic");
    }

    let crc_off = bytes.len() - 4;
    let crc_expected = u32::from_le_bytes(bytes[crc_off..].try_into()?);
    if crc_expected != crc32(&bytes[..crc_off]) {
        anyhow::bail!("snapshot crc32 mismatch");
    }

    let mut i = 4usize;
    let range_min = i32::from_le_bytes(take::<4>(bytes, &mut i)?);
    let range_max = i32::from_le_bytes(take::<4>(bytes, &mut i)?);
    let interval_ms = u64::from_le_bytes(take::<8>(bytes, &mut i)?);
    let count = u32::from_le_bytes(take::<4>(bytes, &mut i)?) as usize;

    if i + count != crc_off {
        anyhow::bail!("snapshot count mismatch: header says {count}, body has {}", crc_off - i);
    }
    if count == 0 {
        anyhow::bail!("snapshot holds no samples");
    }

    Ok(Snapshot {
        range_min,
        range_max,
        interval_ms,
        codes: bytes[i..crc_off].to_vec(),
    })
}

pub fn write_snapshot(path: &str, snap: &Snapshot) -> anyhow::Result<()> {
    std::fs::write(path, encode(snap)).with_context(|| format!("write snapshot {path}"))?;
    Ok(())
}

pub fn read_snapshot(path: &str) -> anyhow::Result<Snapshot> {
    let bytes = std::fs::read(path).with_context(|| format!("read snapshot {path}"))?;
    decode(&bytes).with_context(|| format!("decode snapshot {path}"))
}

fn take<const N: usize>(bytes: &[u8], i: &mut usize) -> anyhow::Result<[u8; N]> {
    let end = *i + N;
    let Some(chunk) = bytes.get(*i..end) else {
        anyhow::bail!("snapshot truncated at offset {}", *i);
    };
    *i = end;
    Ok(chunk.try_into()?)
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snapshot {
        Snapshot {
            range_min: -40,
            range_max: 85,
            interval_ms: 300_000,
            codes: vec![76, 229, 127, 25],
        }
    }

    #[test]
    fn layout_is_stable() {
        let bytes = encode(&sample());
        assert_eq!(bytes.len(), HEADER_LEN + 4 + 4);
        assert_eq!(&bytes[0..4], b"SBB1");
        assert_eq!(&bytes[4..8], &(-40i32).to_le_bytes());
        assert_eq!(&bytes[20..24], &4u32.to_le_bytes());
        assert_eq!(&bytes[24..28], &[76, 229, 127, 25]);
        assert_eq!(decode(&bytes).unwrap(), sample());
    }

    #[test]
    fn flipped_code_fails_crc() {
        let mut bytes = encode(&sample());
        bytes[25] ^= 0x01;
        let err = decode(&bytes).unwrap_err();
        assert!(format!("{err}").contains("crc32"));
    }

    #[test]
    fn rejects_foreign_magic_and_short_input() {
        let mut bytes = encode(&sample());
        bytes[0] = b'X';
        assert!(decode(&bytes).is_err());
        assert!(decode(&bytes[..10]).is_err());
    }
}
