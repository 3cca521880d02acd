use std::{
    fs::File,
    io::{BufReader, Read, stdin},
    path::PathBuf,
};

use clap::Parser;

use crate::{core::request::DispatchRequest, prelude::*};

#[derive(Parser)]
pub struct RequestArgs {
    /// JSON request file, reads the standard input when omitted or `-`.
    #[clap(long, env = "DISPATCH_INPUT")]
    pub input: Option<PathBuf>,
}

impl RequestArgs {
    pub fn read(&self) -> Result<DispatchRequest> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open `{}`", path.display()))?;
                parse_request(BufReader::new(file))
            }
            _ => parse_request(stdin().lock()),
        }
    }
}

pub fn parse_request(reader: impl Read) -> Result<DispatchRequest> {
    let request: DispatchRequest =
        serde_json::from_reader(reader).context("failed to parse the dispatch request")?;
    debug!(?request, "parsed the request");
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::energy::KilowattHours;

    #[test]
    fn test_parse_request() -> Result {
        let request = parse_request(
            br#"{"solarGen":10,"windGen":10,"demand":50,"storageCharge":15,"storageCapacity":100}"#
                .as_slice(),
        )?;
        assert_eq!(request.surplus(), KilowattHours(-30.0));
        Ok(())
    }

    #[test]
    fn test_parse_malformed_request() {
        assert!(parse_request(br#"{"solarGen":10"#.as_slice()).is_err());
        assert!(parse_request(br#"{"solarGen":10,"extra":1}"#.as_slice()).is_err());
    }
}
