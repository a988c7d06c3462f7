use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Features: u32 {
const TC131 = 1 << 0;
const TC16 = 1 << 1;
const TC161 = 1 << 2; // TC1.6.1 (16-bit JEQ/JNE with extended disp4)
const TC162 = 1 << 3;
}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// ISA revisions the decision tables may match.
    pub features: Features,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self { features: Features::all() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_supports_everything() {
        assert_eq!(DecoderConfig::default().features, Features::all());
    }

    #[test]
    fn loads_from_json() {
        let cfg: DecoderConfig = serde_json::from_str(r#"{ "features": "TC131 | TC16" }"#).unwrap();
        assert_eq!(cfg.features, Features::TC131 | Features::TC16);

        let cfg: DecoderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, DecoderConfig::default());
    }
}
