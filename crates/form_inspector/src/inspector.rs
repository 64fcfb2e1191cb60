use log::{debug, info};
use std::io::Write;
use std::time::Duration;

use crate::error::InspectError;
use crate::render::{Payload, Rendered, render};
use crate::target::Target;

pub struct FormInspector {
    target: Target,
}

impl FormInspector {
    pub fn new(target: Target) -> Self {
        return FormInspector { target };
    }

    /// Performs one GET and returns the decoded body. The client and its
    /// connection live only for the duration of this call, on every path.
    pub fn fetch(&self) -> Result<Payload, InspectError> {
        let url = self.target.url();
        debug!("fetch | url: {}", url);

        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .pool_max_idle_per_host(0)
            .build()?;

        let response = client.get(&url).send()?;
        info!("fetch | status: {}", response.status());

        let body = response.bytes()?;
        debug!("fetch | read {} bytes", body.len());

        let text = String::from_utf8(body.to_vec())?;
        Ok(Payload(text))
    }

    pub fn inspect(&self) -> Result<Rendered, InspectError> {
        let payload = self.fetch()?;
        let rendered = render(&payload);
        if let Rendered::Fallback { message, .. } = &rendered {
            debug!("inspect | body is not JSON: {}", message);
        }
        Ok(rendered)
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<(), InspectError> {
        let rendered = self.inspect()?;
        writeln!(out, "{}", rendered)?;
        Ok(())
    }
}
