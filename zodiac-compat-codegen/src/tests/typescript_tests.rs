use super::*;
use zodiac_compat_core::{CompatEntry, CompatKey};

fn steady_alliance() -> CompatTable {
    let mut table = CompatTable::new();
    table.insert(
        CompatKey::new("Rat", "Ox"),
        CompatEntry::new(
            "Rat × Ox — Steady Alliance",
            "Grounded and dependable.",
            "Rat's quick wit meets Ox's patience.",
        ),
    );
    table
}

#[test]
fn renders_complete_module() {
    let ts = TypeScriptTarget::new().render(&steady_alliance());
    let expected = r#"// AUTO-GENERATED - Do not edit manually
// Generated from AstroLab compatibility descriptions

export type ChineseAnimal =
  | "Rat" | "Ox" | "Tiger" | "Rabbit"
  | "Dragon" | "Snake" | "Horse" | "Goat"
  | "Monkey" | "Rooster" | "Dog" | "Pig";

export interface ChineseCompatibilityBlurb {
  heading: string;
  tagline: string;
  description: string;
}

export const chineseConnectionBlurbs: Record<string, ChineseCompatibilityBlurb> = {
  "Ox-Rat": {
    heading: "Rat × Ox — Steady Alliance",
    tagline: "Grounded and dependable.",
    description: "Rat's quick wit meets Ox's patience."
  }
};

function makeChineseKey(a: ChineseAnimal, b: ChineseAnimal): string {
  const animals = [a, b].sort();
  return `${animals[0]}-${animals[1]}`;
}

export function getChineseConnectionBlurb(
  a: ChineseAnimal,
  b: ChineseAnimal
): ChineseCompatibilityBlurb | null {
  const key = makeChineseKey(a, b);
  return chineseConnectionBlurbs[key] ?? null;
}
"#;
    assert_eq!(ts, expected);
}

#[test]
fn entries_sorted_with_commas_between() {
    let mut table = steady_alliance();
    table.insert(
        CompatKey::new("Tiger", "Dog"),
        CompatEntry::new("Tiger × Dog — Loyal Fire", "Brave.", "Protective pair."),
    );
    table.insert(
        CompatKey::new("Snake", "Rooster"),
        CompatEntry::new("Snake × Rooster — Sharp Minds", "Precise.", "Detail lovers."),
    );

    let ts = TypeScriptTarget::new().render(&table);
    let dog = ts.find("\"Dog-Tiger\": {").unwrap();
    let ox = ts.find("\"Ox-Rat\": {").unwrap();
    let rooster = ts.find("\"Rooster-Snake\": {").unwrap();
    assert!(dog < ox && ox < rooster);

    // Separator after every entry but the last.
    assert_eq!(ts.matches("\n  },\n").count(), 2);
    assert_eq!(ts.matches("\n  }\n};").count(), 1);
}

#[test]
fn empty_table_renders_empty_object() {
    let ts = TypeScriptTarget::new().render(&CompatTable::new());
    assert!(ts.contains(
        "export const chineseConnectionBlurbs: Record<string, ChineseCompatibilityBlurb> = {\n};\n"
    ));
}

#[test]
fn text_fields_are_escaped() {
    let mut table = CompatTable::new();
    table.insert(
        CompatKey::new("Goat", "Pig"),
        CompatEntry::new(
            "Goat × Pig — \"Soft\" Match",
            "Path\\to\ncomfort",
            "Line one\nline two",
        ),
    );

    let ts = TypeScriptTarget::new().render(&table);
    assert!(ts.contains(r#"heading: "Goat × Pig — \"Soft\" Match","#));
    assert!(ts.contains(r#"tagline: "Path\\to comfort","#));
    assert!(ts.contains(r#"description: "Line one line two""#));
}

#[test]
fn sign_type_lists_every_sign_once() {
    let ts = TypeScriptTarget::new().render(&CompatTable::new());
    for sign in Sign::all() {
        assert_eq!(
            ts.matches(&format!("| \"{}\"", sign.name())).count(),
            1,
            "{sign} should appear once in ChineseAnimal"
        );
    }
}

#[test]
fn render_is_deterministic() {
    let target = TypeScriptTarget::new();
    assert_eq!(target.render(&steady_alliance()), target.render(&steady_alliance()));
}
