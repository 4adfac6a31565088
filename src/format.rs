//! Textual rendering of vectors.
//!
//! The layout is `<open><v0><delim><v1>...<vN-1><close>`. The default style
//! is space-delimited with square brackets, e.g. `[1 2 3 4]`. Styles can be
//! deserialized from configuration; missing fields fall back to the default.

use core::fmt::{self, Debug, Display, Formatter, Write};

use serde::{Deserialize, Serialize};

use crate::lane::Lane;
use crate::vector::Vector128;

/// Bracket pair presets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Brackets {
    /// `( )`
    Round,
    /// `[ ]`
    #[default]
    Square,
    /// `{ }`
    Curly,
    /// `< >`
    Pointy,
}

impl Brackets {
    pub fn open(self) -> &'static str {
        match self {
            Brackets::Round => "(",
            Brackets::Square => "[",
            Brackets::Curly => "{",
            Brackets::Pointy => "<",
        }
    }

    pub fn close(self) -> &'static str {
        match self {
            Brackets::Round => ")",
            Brackets::Square => "]",
            Brackets::Curly => "}",
            Brackets::Pointy => ">",
        }
    }
}

/// Delimiter presets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    /// `" "`
    #[default]
    Space,
    /// `","`
    Comma,
    /// `", "`
    CommaSpace,
    /// `" ,"`
    SpaceComma,
}

impl Delimiter {
    pub fn as_str(self) -> &'static str {
        match self {
            Delimiter::Space => " ",
            Delimiter::Comma => ",",
            Delimiter::CommaSpace => ", ",
            Delimiter::SpaceComma => " ,",
        }
    }
}

/// Delimiter and bracket pair used to render a vector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatStyle {
    /// Written between two lanes.
    pub delimiter: String,
    /// Written before the first lane.
    pub open: String,
    /// Written after the last lane.
    pub close: String,
}

impl Default for FormatStyle {
    fn default() -> Self {
        Self::new(Delimiter::default(), Brackets::default())
    }
}

impl FormatStyle {
    pub fn new(delimiter: Delimiter, brackets: Brackets) -> Self {
        Self {
            delimiter: delimiter.as_str().to_owned(),
            open: brackets.open().to_owned(),
            close: brackets.close().to_owned(),
        }
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_brackets(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.open = open.into();
        self.close = close.into();
        self
    }
}

fn write_lanes<S: Lane, W: Write>(
    v: &Vector128<S>,
    out: &mut W,
    delimiter: &str,
    open: &str,
    close: &str,
    mut lane: impl FnMut(&mut W, S) -> fmt::Result,
) -> fmt::Result {
    out.write_str(open)?;
    for (i, value) in v.iter().enumerate() {
        if i != 0 {
            out.write_str(delimiter)?;
        }
        lane(out, value)?;
    }
    out.write_str(close)
}

/// A vector paired with the style it renders in.
struct Styled<'a, S: Lane> {
    vector: &'a Vector128<S>,
    style: &'a FormatStyle,
}

impl<S: Lane> Display for Styled<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.vector.write_with(f, self.style)
    }
}

impl<S: Lane> Vector128<S> {
    /// Renders the lanes with a custom style.
    pub fn to_string_with(&self, style: &FormatStyle) -> String {
        Styled { vector: self, style }.to_string()
    }

    /// Writes the lanes with a custom style.
    pub fn write_with<W: Write>(&self, out: &mut W, style: &FormatStyle) -> fmt::Result {
        write_lanes(self, out, &style.delimiter, &style.open, &style.close, |w, lane| {
            write!(w, "{}", lane)
        })
    }
}

/// `[v0 v1 ... vN-1]`. Width and precision flags apply to every lane.
impl<S: Lane> Display for Vector128<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (delimiter, brackets) = (Delimiter::default(), Brackets::default());
        let mut lanes = self.iter();
        f.write_str(brackets.open())?;
        if let Some(first) = lanes.next() {
            Display::fmt(&first, f)?;
        }
        for lane in lanes {
            f.write_str(delimiter.as_str())?;
            Display::fmt(&lane, f)?;
        }
        f.write_str(brackets.close())
    }
}

impl<S: Lane> Debug for Vector128<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vector128<{}>", core::any::type_name::<S>())?;
        write_lanes(self, f, ", ", "[", "]", |w, lane| write!(w, "{:?}", lane))
    }
}
