//! CSS-style padding shorthand.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Space between the border and the content, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Padding {
    pub const fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn uniform(value: usize) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn symmetric(vertical: usize, horizontal: usize) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Expand a 1, 2, 3 or 4 value shorthand the way CSS does.
    pub fn from_values(values: &[usize]) -> Option<Self> {
        match *values {
            [all] => Some(Self::uniform(all)),
            [vertical, horizontal] => Some(Self::symmetric(vertical, horizontal)),
            [top, horizontal, bottom] => Some(Self::new(top, horizontal, bottom, horizontal)),
            [top, right, bottom, left] => Some(Self::new(top, right, bottom, left)),
            _ => None,
        }
    }

    pub fn horizontal(&self) -> usize {
        self.left + self.right
    }

    pub fn vertical(&self) -> usize {
        self.top + self.bottom
    }

    pub fn is_empty(&self) -> bool {
        self.horizontal() == 0 && self.vertical() == 0
    }
}

impl From<usize> for Padding {
    fn from(value: usize) -> Self {
        Self::uniform(value)
    }
}

impl From<(usize, usize)> for Padding {
    fn from((vertical, horizontal): (usize, usize)) -> Self {
        Self::symmetric(vertical, horizontal)
    }
}

impl From<(usize, usize, usize, usize)> for Padding {
    fn from((top, right, bottom, left): (usize, usize, usize, usize)) -> Self {
        Self::new(top, right, bottom, left)
    }
}

/// Comma or space separated shorthand, e.g. `1`, `1,2` or `0 1 0 1`.
impl FromStr for Padding {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let values = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<usize>()
                    .map_err(|_| format!("invalid padding value `{part}`"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_values(&values)
            .ok_or_else(|| format!("padding takes 1 to 4 values, got {}", values.len()))
    }
}

impl<'de> Deserialize<'de> for Padding {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shorthand {
            All(usize),
            Sides(Vec<usize>),
        }

        match Shorthand::deserialize(deserializer)? {
            Shorthand::All(value) => Ok(Self::uniform(value)),
            Shorthand::Sides(values) => Self::from_values(&values).ok_or_else(|| {
                serde::de::Error::custom(format!(
                    "padding takes 1 to 4 values, got {}",
                    values.len()
                ))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_pads_every_side() {
        assert_eq!(Padding::from(2), Padding::new(2, 2, 2, 2));
    }

    #[test]
    fn pair_is_vertical_then_horizontal() {
        let padding = Padding::from((1, 2));
        assert_eq!(padding, Padding::new(1, 2, 1, 2));
        assert_eq!(padding.horizontal(), 4);
        assert_eq!(padding.vertical(), 2);
    }

    #[test]
    fn shorthand_lengths() {
        assert_eq!(Padding::from_values(&[1, 2, 3]), Some(Padding::new(1, 2, 3, 2)));
        assert_eq!(
            Padding::from_values(&[1, 2, 3, 4]),
            Some(Padding::new(1, 2, 3, 4))
        );
        assert_eq!(Padding::from_values(&[]), None);
        assert_eq!(Padding::from_values(&[1, 2, 3, 4, 5]), None);
    }

    #[test]
    fn parses_cli_shorthand() {
        assert_eq!("1".parse::<Padding>(), Ok(Padding::uniform(1)));
        assert_eq!("1,2".parse::<Padding>(), Ok(Padding::symmetric(1, 2)));
        assert_eq!("0 1 0 1".parse::<Padding>(), Ok(Padding::new(0, 1, 0, 1)));
        assert!("x".parse::<Padding>().is_err());
        assert!("".parse::<Padding>().is_err());
    }

    #[test]
    fn deserializes_number_and_list() {
        let padding: Padding = serde_json::from_str("3").expect("number");
        assert_eq!(padding, Padding::uniform(3));
        let padding: Padding = serde_json::from_str("[1, 2]").expect("pair");
        assert_eq!(padding, Padding::symmetric(1, 2));
        assert!(serde_json::from_str::<Padding>("[1, 2, 3, 4, 5]").is_err());
    }

    #[test]
    fn default_is_empty() {
        assert!(Padding::default().is_empty());
        assert!(!Padding::uniform(1).is_empty());
    }
}
