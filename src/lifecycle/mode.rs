use crate::args::Params;
use crate::engine::LoadSettings;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunMode {
    /// One request whose response is printed instead of a load report.
    SingleShot,
    LoadTest(LoadSettings),
}

impl RunMode {
    #[must_use]
    pub fn from_params(params: &Params) -> Self {
        if params.is_single_shot() {
            return RunMode::SingleShot;
        }
        RunMode::LoadTest(LoadSettings {
            requests: params.requests(),
            concurrency: params.concurrency(),
            qps: params.qps(),
        })
    }
}
