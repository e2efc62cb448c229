use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Iex,
    DarkSky,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Transport,
    Http,
    Decode,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Transport => "transport",
            Stage::Http => "http",
            Stage::Decode => "decode",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderError {
    pub provider: Provider,
    pub stage: Stage,
    pub detail: String,
    pub body: Option<String>,
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "upstream error (provider={:?}, stage={}): {}",
            self.provider,
            self.stage.as_str(),
            self.detail
        )
    }
}

impl std::error::Error for ProviderError {}
