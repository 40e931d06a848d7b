use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::error::DataLoadError;

/// One entry of the element palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub symbol: String,
    /// Number of electrons drawn around the nucleus.
    pub atomic_number: u32,
    /// Background of the palette icon.
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ElementRecord {
    pub fn new(symbol: &str, atomic_number: u32, color: &str) -> Self {
        ElementRecord {
            symbol: symbol.to_string(),
            atomic_number,
            color: color.to_string(),
            name: None,
        }
    }
}

/// Heaviest element the shell layout can hold.
pub const MAX_ATOMIC_NUMBER: u32 = 118;

// hex (#rgb, #rgba, #rrggbb, #rrggbbaa) or rgb()/rgba()/hsl()/hsla() with numeric arguments
static COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(#([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})|(rgb|rgba|hsl|hsla)\(\s*[-+0-9.%\s,/]+\))$",
    )
    .expect("color regex is valid")
});

const CSS_COLOR_NAMES: [&str; 149] = [
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan",
    "teal", "thistle", "tomato", "turquoise", "violet", "wheat", "white", "whitesmoke",
    "yellow", "yellowgreen", "transparent",
];

pub fn is_valid_color(color: &str) -> bool {
    COLOR_RE.is_match(color)
        || CSS_COLOR_NAMES
            .iter()
            .any(|name| name.eq_ignore_ascii_case(color))
}

/// Fixed, ordered list of elements. Never mutated after loading.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    elements: Vec<ElementRecord>,
}

impl Catalog {
    /// Read and validate the catalog file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Catalog, DataLoadError> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DataLoadError::FileNotFound(path.display().to_string()),
            _ => DataLoadError::Unreadable {
                path: path.display().to_string(),
                source: e,
            },
        })?;

        let catalog = Catalog::from_reader(file)?;
        log::info!(
            "Loaded {} elements from `{}`.",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse a JSON array of element objects from any reader.
    pub fn from_reader(reader: impl Read) -> Result<Catalog, DataLoadError> {
        let elements: Vec<ElementRecord> = serde_json::from_reader(reader)?;
        Catalog::from_elements(elements)
    }

    /// Validate records and normalize their symbol and color.
    pub fn from_elements(mut elements: Vec<ElementRecord>) -> Result<Catalog, DataLoadError> {
        let mut seen = HashSet::new();
        for (index, el) in elements.iter_mut().enumerate() {
            el.symbol = el.symbol.trim().to_string();
            el.color = el.color.trim().to_string();

            if el.symbol.is_empty() {
                return Err(DataLoadError::EmptySymbol { index });
            }
            if !seen.insert(el.symbol.clone()) {
                return Err(DataLoadError::DuplicateSymbol(el.symbol.clone()));
            }
            if el.atomic_number > MAX_ATOMIC_NUMBER {
                return Err(DataLoadError::AtomicNumberOutOfRange {
                    symbol: el.symbol.clone(),
                    atomic_number: el.atomic_number,
                });
            }
            if !is_valid_color(&el.color) {
                return Err(DataLoadError::InvalidColor {
                    symbol: el.symbol.clone(),
                    color: el.color.clone(),
                });
            }
        }

        Ok(Catalog { elements })
    }

    pub fn get(&self, symbol: &str) -> Option<&ElementRecord> {
        self.elements.iter().find(|el| el.symbol == symbol)
    }

    pub fn elements(&self) -> &[ElementRecord] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_preserves_order() {
        let json = r##"[
            {"symbol": "He", "atomic_number": 2, "color": "#d9ffff"},
            {"symbol": "H", "atomic_number": 1, "color": "#fff", "name": "Hydrogen"}
        ]"##;
        let catalog = Catalog::from_reader(json.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.elements()[0].symbol, "He");
        assert_eq!(catalog.elements()[1].symbol, "H");
        assert_eq!(catalog.elements()[1].name.as_deref(), Some("Hydrogen"));
    }

    #[test]
    fn parse_ignores_unknown_fields() {
        let json = r##"[{"symbol": "Li", "atomic_number": 3, "color": "purple", "mass": 6.94}]"##;
        let catalog = Catalog::from_reader(json.as_bytes()).unwrap();
        assert_eq!(catalog.get("Li").unwrap().atomic_number, 3);
    }

    #[test]
    fn parse_accepts_zero_electrons() {
        let json = r##"[{"symbol": "Nn", "atomic_number": 0, "color": "rgba(0, 0, 0, 0.5)"}]"##;
        let catalog = Catalog::from_reader(json.as_bytes()).unwrap();
        assert_eq!(catalog.get("Nn").unwrap().atomic_number, 0);
    }

    #[test]
    fn parse_missing_atomic_number() {
        let json = r##"[
            {"symbol": "H", "atomic_number": 1, "color": "#fff"},
            {"symbol": "He", "color": "#d9ffff"}
        ]"##;
        assert!(matches!(
            Catalog::from_reader(json.as_bytes()),
            Err(DataLoadError::Malformed(_))
        ));
    }

    #[test]
    fn parse_negative_atomic_number() {
        let json = r##"[{"symbol": "H", "atomic_number": -1, "color": "#fff"}]"##;
        assert!(matches!(
            Catalog::from_reader(json.as_bytes()),
            Err(DataLoadError::Malformed(_))
        ));
    }

    #[test]
    fn parse_not_a_list() {
        let json = r##"{"symbol": "H", "atomic_number": 1, "color": "#fff"}"##;
        assert!(matches!(
            Catalog::from_reader(json.as_bytes()),
            Err(DataLoadError::Malformed(_))
        ));
    }

    #[test]
    fn parse_empty_symbol() {
        let json = r##"[
            {"symbol": "H", "atomic_number": 1, "color": "#fff"},
            {"symbol": " ", "atomic_number": 2, "color": "#fff"}
        ]"##;
        match Catalog::from_reader(json.as_bytes()) {
            Err(DataLoadError::EmptySymbol { index }) => assert_eq!(index, 1),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn parse_duplicate_symbol() {
        let json = r##"[
            {"symbol": "H", "atomic_number": 1, "color": "#fff"},
            {"symbol": "H", "atomic_number": 1, "color": "#eee"}
        ]"##;
        match Catalog::from_reader(json.as_bytes()) {
            Err(DataLoadError::DuplicateSymbol(symbol)) => assert_eq!(symbol, "H"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn parse_invalid_color() {
        for color in ["#ggg", "#12345", "definitelynotacolor", "rgb(red)", "rgba(1, 2, 3", ""] {
            let json = format!(r##"[{{"symbol": "H", "atomic_number": 1, "color": "{color}"}}]"##);
            assert!(
                matches!(
                    Catalog::from_reader(json.as_bytes()),
                    Err(DataLoadError::InvalidColor { .. })
                ),
                "color `{}` was accepted",
                color
            );
        }
    }

    #[test]
    fn parse_valid_colors() {
        for color in ["#fff", "#FFFA", "#3050f8", "#3050f880", "rgb(48, 80, 248)", "rgba(0, 0, 0, 0.5)", "hsl(120, 50%, 40%)", "Gold", "rebeccapurple"] {
            assert!(is_valid_color(color), "color `{}` was rejected", color);
        }
    }

    #[test]
    fn parse_trims_symbol_and_color() {
        let json = r##"[{"symbol": " H ", "atomic_number": 1, "color": " #fff "}]"##;
        let catalog = Catalog::from_reader(json.as_bytes()).unwrap();

        let h = catalog.get("H").unwrap();
        assert_eq!(h.symbol, "H");
        assert_eq!(h.color, "#fff");
    }

    #[test]
    fn parse_duplicate_after_trim() {
        let json = r##"[
            {"symbol": "H", "atomic_number": 1, "color": "#fff"},
            {"symbol": "H ", "atomic_number": 1, "color": "#fff"}
        ]"##;
        assert!(matches!(
            Catalog::from_reader(json.as_bytes()),
            Err(DataLoadError::DuplicateSymbol(_))
        ));
    }

    #[test]
    fn parse_atomic_number_out_of_range() {
        let json = r##"[{"symbol": "Xx", "atomic_number": 4000000000, "color": "#fff"}]"##;
        match Catalog::from_reader(json.as_bytes()) {
            Err(DataLoadError::AtomicNumberOutOfRange { symbol, atomic_number }) => {
                assert_eq!(symbol, "Xx");
                assert_eq!(atomic_number, 4_000_000_000);
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let json = r##"[{"symbol": "Og", "atomic_number": 118, "color": "#fff"}]"##;
        assert!(Catalog::from_reader(json.as_bytes()).is_ok());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"[{{"symbol": "C", "atomic_number": 6, "color": "#909090"}}]"##
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.elements(), &[ElementRecord::new("C", 6, "#909090")]);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nonexistent.json");

        match Catalog::load(&path) {
            Err(DataLoadError::FileNotFound(p)) => assert_eq!(p, path.display().to_string()),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn load_default_catalog() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/elements.json");
        let catalog = Catalog::load(path).unwrap();

        assert_eq!(catalog.len(), 20);
        assert_eq!(catalog.elements()[0].symbol, "H");
        assert_eq!(catalog.get("Ca").unwrap().atomic_number, 20);
    }
}
