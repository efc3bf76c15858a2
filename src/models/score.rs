use crate::error::StoreError;

const DELIMITER: char = ',';

/// One leaderboard record. Names containing the delimiter do not survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScore {
    pub name: String,
    pub score: u32,
}

impl PlayerScore {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    pub fn to_line(&self) -> String {
        format!("{}{}{}\n", self.name, DELIMITER, self.score)
    }

    /// Parses one `name,score` line.
    ///
    /// Returns `Ok(None)` for lines that do not split into exactly two fields.
    /// Trailing empty fields are dropped before counting, so `"bob,"` is skipped.
    pub fn parse_line(line: &str) -> Result<Option<Self>, StoreError> {
        let mut fields: Vec<&str> = line.split(DELIMITER).collect();
        while fields.len() > 1 && fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }

        let [name, value] = fields.as_slice() else {
            return Ok(None);
        };

        let score = value
            .parse::<u32>()
            .map_err(|_| StoreError::MalformedScore {
                line: line.to_string(),
                value: value.to_string(),
            })?;

        Ok(Some(Self::new(*name, score)))
    }
}
