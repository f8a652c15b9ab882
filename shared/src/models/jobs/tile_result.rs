use crate::errors::MalformedResultError;

/// Per-pixel intensities for one computed tile. The origin travels inside
/// the payload so the assembler can place results arriving in any order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileResult {
    pub origin_x: u32,
    pub origin_y: u32,
    /// Row-major (y outer, x inner) starting at the origin, `edge²` long.
    pub colors: Vec<u8>,
}

impl TileResult {
    pub fn new(origin_x: u32, origin_y: u32, colors: Vec<u8>) -> Self {
        Self {
            origin_x,
            origin_y,
            colors,
        }
    }

    /// Wire form: a flat JSON array `[origin_x, origin_y, color_0, ...]`.
    pub fn to_json(&self) -> serde_json::Value {
        let mut payload: Vec<u32> = Vec::with_capacity(self.colors.len() + 2);
        payload.push(self.origin_x);
        payload.push(self.origin_y);
        payload.extend(self.colors.iter().map(|&color| u32::from(color)));
        serde_json::json!(payload)
    }

    /// Inverse of `to_json`.
    pub fn from_json(raw: &str) -> Result<Self, MalformedResultError> {
        let payload: Vec<u32> = serde_json::from_str(raw)?;
        if payload.len() < 2 {
            return Err(MalformedResultError::MissingOrigin {
                found: payload.len(),
            });
        }

        let mut colors = Vec::with_capacity(payload.len() - 2);
        for (index, &value) in payload[2..].iter().enumerate() {
            if value > 255 {
                return Err(MalformedResultError::ColorOutOfRange { index, value });
            }
            colors.push(value as u8);
        }

        Ok(Self {
            origin_x: payload[0],
            origin_y: payload[1],
            colors,
        })
    }
}
