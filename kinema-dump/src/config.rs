use kinema::{Config, Configurable, GlobalConfig};

#[derive(Clone, Debug)]
pub(crate) struct DumpConfig {
    /// Scenario configuration.
    pub scenario: Config,
    /// Path of the CSV frame dump, if any.
    pub csv: Option<std::path::PathBuf>,
    /// Global configuration.
    pub global: GlobalConfig,
}

impl Configurable for DumpConfig {
    fn global(&self) -> &GlobalConfig {
        &self.global
    }
}
