use anyhow::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Segment {
    pub name: String,
    pub base: u64,
    pub bytes: Vec<u8>,
    pub perms: &'static str, // e.g., "r-x"
    pub kind: &'static str,  // e.g., "raw"
}

impl Segment {
    /// One past the last mapped address.
    pub fn end(&self) -> u64 {
        self.base + self.bytes.len() as u64
    }

    pub fn contains(&self, addr: u64) -> bool {
        addr >= self.base && addr < self.end()
    }
}

#[derive(Debug, Clone)]
pub struct Image {
    pub segments: Vec<Segment>,
}

impl Image {
    /// Bytes of `[start, end)`, clipped to the segment holding `start`.
    pub fn window(&self, start: u64, end: u64) -> Option<&[u8]> {
        let seg = self.segments.iter().find(|s| s.contains(start))?;
        let lo = (start - seg.base) as usize;
        let hi = (end.min(seg.end()) - seg.base) as usize;
        seg.bytes.get(lo..hi)
    }
}

pub fn load_raw_bin(path: &Path, base: u64, skip: usize, len: Option<usize>) -> Result<Image> {
    let file = std::fs::read(path)?;
    anyhow::ensure!(skip <= file.len(), "--skip exceeds file size");
    let mut payload = &file[skip..];
    if let Some(lim) = len {
        anyhow::ensure!(lim <= payload.len(), "--len exceeds remaining file size after skip");
        payload = &payload[..lim];
    }
    let seg = Segment { name: "segment0".into(), base, bytes: payload.to_vec(), perms: "r-x", kind: "raw" };
    Ok(Image { segments: vec![seg] })
}
