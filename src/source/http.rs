use std::time::Duration;

use ureq::Agent;

use super::Source;
use crate::error::LoadError;

/// Session document served over HTTP(S)
pub(crate) struct HttpSource {
    url: String,
    agent: Agent,
}

impl HttpSource {
    pub(crate) fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self {
            url: url.into(),
            agent,
        }
    }
}

impl Source for HttpSource {
    fn display_name(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<String, LoadError> {
        log::debug!("GET {}", self.url);
        let response = self.agent.get(&self.url).call().map_err(|e| self.unavailable(e))?;
        let mut body = response.into_body();
        body.read_to_string().map_err(|e| self.unavailable(e))
    }
}
