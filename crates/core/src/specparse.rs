//! Best-effort parser for master-list specification text.
//!
//! Master cards store their targets (chemistry, tensile, microstructure,
//! hardness) as loosely-typed text entered over years of legacy use. This
//! module derives display-ready structured values from that text for the
//! trial report pages. It is read-side only: parsed values are never
//! written back, so a miss degrades to a blank field or `"--"`, never to
//! data corruption. None of the functions here can fail.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Placeholder rendered when a microstructure or hardness value is absent.
pub const PLACEHOLDER: &str = "--";

// ---------------------------------------------------------------------------
// Chemical composition
// ---------------------------------------------------------------------------

/// Matches `C: 0.40`, `Mn = 0.70`, `Si:3.8-4.2` style element entries.
/// Element symbols are one or two letters; longer keywords (`Nodularity`)
/// are deliberately not matched here.
static ELEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([A-Za-z]{1,2})\s*[:=]\s*([0-9]+(?:\.[0-9]+)?(?:\s*-\s*[0-9]+(?:\.[0-9]+)?)?%?)")
        .expect("valid regex")
});

/// Display-ready chemical composition targets.
///
/// Elements absent from the source text render as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChemicalComposition {
    pub c: String,
    pub si: String,
    pub mn: String,
    pub p: String,
    pub s: String,
    pub mg: String,
    pub cu: String,
    pub cr: String,
    pub ni: String,
}

/// Parse a chemical composition field.
///
/// Accepts, in order of preference:
/// - a JSON object (`{"C": "0.40", "Mn": "0.70"}`),
/// - a JSON-encoded string containing one of the other forms,
/// - freeform text (`"C: 0.40 Mn: 0.70"`).
///
/// Element keys are matched case-insensitively. Unknown elements are
/// ignored; missing elements stay empty.
pub fn parse_chemical_composition(raw: Option<&str>) -> ChemicalComposition {
    let mut out = ChemicalComposition::default();
    let Some(raw) = raw else { return out };
    let raw = raw.trim();
    if raw.is_empty() {
        return out;
    }

    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Object(map)) => {
            for (key, value) in map {
                let text = match value {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Number(n) => n.to_string(),
                    _ => continue,
                };
                assign_element(&mut out, &key, &text);
            }
        }
        // A JSON-encoded string wraps one of the other forms.
        Ok(serde_json::Value::String(inner)) => {
            return parse_chemical_composition(Some(&inner));
        }
        _ => {
            for cap in ELEMENT_RE.captures_iter(raw) {
                assign_element(&mut out, &cap[1], cap[2].trim());
            }
        }
    }
    out
}

fn assign_element(out: &mut ChemicalComposition, key: &str, value: &str) {
    let slot = match key.to_ascii_lowercase().as_str() {
        "c" => &mut out.c,
        "si" => &mut out.si,
        "mn" => &mut out.mn,
        "p" => &mut out.p,
        "s" => &mut out.s,
        "mg" => &mut out.mg,
        "cu" => &mut out.cu,
        "cr" => &mut out.cr,
        "ni" => &mut out.ni,
        _ => return,
    };
    // First occurrence wins; repeated keys in legacy text are noise.
    if slot.is_empty() {
        *slot = value.to_string();
    }
}

// ---------------------------------------------------------------------------
// Tensile requirement
// ---------------------------------------------------------------------------

/// A threshold-prefixed numeric value: `≥550`, `> 320`, `= 10`.
static THRESHOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:≥|>=|>|=)\s*([0-9]+(?:\.[0-9]+)?)").expect("valid regex"));

/// Any bare numeric token.
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("valid regex"));

/// Display-ready tensile targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TensileSpec {
    pub tensile_strength: String,
    pub yield_strength: String,
    pub elongation: String,
}

/// Parse a tensile requirement field.
///
/// Threshold-prefixed numbers (`≥`, `>`, `=`) found in the text are
/// assigned positionally: first → tensile strength, second → yield,
/// third → elongation. When fewer than two are present, falls back to
/// line-based keyword matching (`Yield`, `Elongation`; anything else with
/// a number is taken as tensile strength).
pub fn parse_tensile(raw: Option<&str>) -> TensileSpec {
    let mut out = TensileSpec::default();
    let Some(raw) = raw else { return out };
    let raw = raw.trim();
    if raw.is_empty() {
        return out;
    }

    let tokens: Vec<String> = THRESHOLD_RE
        .captures_iter(raw)
        .map(|cap| cap[1].to_string())
        .collect();

    if tokens.len() >= 2 {
        out.tensile_strength = tokens[0].clone();
        out.yield_strength = tokens[1].clone();
        if let Some(third) = tokens.get(2) {
            out.elongation = third.clone();
        }
        return out;
    }

    for line in raw.lines() {
        let lower = line.to_ascii_lowercase();
        let Some(number) = NUMBER_RE.find(line) else {
            continue;
        };
        let number = number.as_str().to_string();
        if lower.contains("yield") {
            if out.yield_strength.is_empty() {
                out.yield_strength = number;
            }
        } else if lower.contains("elongation") {
            if out.elongation.is_empty() {
                out.elongation = number;
            }
        } else if out.tensile_strength.is_empty() {
            out.tensile_strength = number;
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Microstructure
// ---------------------------------------------------------------------------

/// Display-ready microstructure targets. Absent values render as `"--"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MicrostructureSpec {
    pub nodularity: String,
    pub pearlite: String,
    pub carbide: String,
}

impl Default for MicrostructureSpec {
    fn default() -> Self {
        Self {
            nodularity: PLACEHOLDER.to_string(),
            pearlite: PLACEHOLDER.to_string(),
            carbide: PLACEHOLDER.to_string(),
        }
    }
}

/// Parse a microstructure field.
///
/// Looks for the keywords nodularity / pearlite / carbide per line, each
/// followed somewhere by a threshold-prefixed or bare percentage.
pub fn parse_microstructure(raw: Option<&str>) -> MicrostructureSpec {
    let mut out = MicrostructureSpec::default();
    let Some(raw) = raw else { return out };

    for line in raw.lines() {
        let lower = line.to_ascii_lowercase();
        let value = THRESHOLD_RE
            .captures(line)
            .map(|cap| cap[1].to_string())
            .or_else(|| NUMBER_RE.find(line).map(|m| m.as_str().to_string()));
        let Some(value) = value else { continue };

        if lower.contains("nodularity") && out.nodularity == PLACEHOLDER {
            out.nodularity = value;
        } else if lower.contains("pearlite") && out.pearlite == PLACEHOLDER {
            out.pearlite = value;
        } else if lower.contains("carbide") && out.carbide == PLACEHOLDER {
            out.carbide = value;
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Hardness
// ---------------------------------------------------------------------------

/// A hardness range (`180-220`) or single value (`220`).
static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\s*-\s*[0-9]+|[0-9]+").expect("valid regex"));

/// Display-ready hardness targets. Absent values render as `"--"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HardnessSpec {
    pub surface: String,
    pub core: String,
}

impl Default for HardnessSpec {
    fn default() -> Self {
        Self {
            surface: PLACEHOLDER.to_string(),
            core: PLACEHOLDER.to_string(),
        }
    }
}

/// Parse a hardness field.
///
/// Each line may carry a `surface` or `core` label; the first unlabeled
/// range found goes to surface when no explicit surface label matched yet.
pub fn parse_hardness(raw: Option<&str>) -> HardnessSpec {
    let mut out = HardnessSpec::default();
    let Some(raw) = raw else { return out };

    for line in raw.lines() {
        let lower = line.to_ascii_lowercase();
        let Some(range) = RANGE_RE.find(line) else {
            continue;
        };
        let range = range.as_str().split_whitespace().collect::<String>();

        if lower.contains("surface") {
            if out.surface == PLACEHOLDER {
                out.surface = range;
            }
        } else if lower.contains("core") {
            if out.core == PLACEHOLDER {
                out.core = range;
            }
        } else if out.surface == PLACEHOLDER {
            out.surface = range;
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
