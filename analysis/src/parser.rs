//! The boundary to the external demo parser.
//!
//! The actual decoding of demo files happens in a separate module, all this
//! workspace knows about it is that it turns bytes into a [`DemoData`] or fails.

use common::DemoData;

use crate::LoadError;

pub trait DemoParser {
    fn parse(&self, bytes: &[u8]) -> Result<DemoData, LoadError>;
}

impl<F> DemoParser for F
where
    F: Fn(&[u8]) -> Result<DemoData, LoadError>,
{
    fn parse(&self, bytes: &[u8]) -> Result<DemoData, LoadError> {
        self(bytes)
    }
}

/// Reads a record from the JSON document the parser module produces
pub fn from_json(json: &[u8]) -> Result<DemoData, LoadError> {
    serde_json::from_slice(json).map_err(|e| LoadError::Parse(format!("Invalid demo record: {}", e)))
}

/// Wraps a parser module that hands back its result as a JSON document.
///
/// Errors reported by the module itself are passed on as they are.
pub fn json_module<M>(module: M) -> impl DemoParser
where
    M: Fn(&[u8]) -> Result<String, String>,
{
    move |bytes: &[u8]| -> Result<DemoData, LoadError> {
        let json = module(bytes).map_err(LoadError::Parse)?;
        from_json(json.as_bytes())
    }
}
