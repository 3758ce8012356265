#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioConfig {
    pub volume: u8,
    pub volume_step: u8,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            volume: 100,
            volume_step: 5,
        }
    }
}
