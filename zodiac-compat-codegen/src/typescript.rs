use zodiac_compat_core::{CompatTable, KEY_SEPARATOR, Sign};

use crate::ModuleTarget;
use crate::escape::ts_string_literal;

/// Union members emitted per line of the `ChineseAnimal` type.
const SIGNS_PER_LINE: usize = 4;

/// Emits `chineseConnectionBlurbs.ts`.
///
/// The exported names (`ChineseAnimal`, `ChineseCompatibilityBlurb`,
/// `chineseConnectionBlurbs`, `getChineseConnectionBlurb`) are what the web
/// app imports, so they must stay stable.
pub struct TypeScriptTarget;

impl TypeScriptTarget {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TypeScriptTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleTarget for TypeScriptTarget {
    fn name(&self) -> &'static str {
        "TypeScript"
    }

    fn render(&self, table: &CompatTable) -> String {
        let mut ts = String::new();
        ts.push_str("// AUTO-GENERATED - Do not edit manually\n");
        ts.push_str("// Generated from AstroLab compatibility descriptions\n");
        ts.push('\n');

        write_sign_type(&mut ts);
        ts.push('\n');

        ts.push_str("export interface ChineseCompatibilityBlurb {\n");
        ts.push_str("  heading: string;\n");
        ts.push_str("  tagline: string;\n");
        ts.push_str("  description: string;\n");
        ts.push_str("}\n");
        ts.push('\n');

        write_table(&mut ts, table);
        ts.push('\n');

        ts.push_str("function makeChineseKey(a: ChineseAnimal, b: ChineseAnimal): string {\n");
        ts.push_str("  const animals = [a, b].sort();\n");
        ts.push_str(&format!(
            "  return `${{animals[0]}}{KEY_SEPARATOR}${{animals[1]}}`;\n"
        ));
        ts.push_str("}\n");
        ts.push('\n');

        ts.push_str("export function getChineseConnectionBlurb(\n");
        ts.push_str("  a: ChineseAnimal,\n");
        ts.push_str("  b: ChineseAnimal\n");
        ts.push_str("): ChineseCompatibilityBlurb | null {\n");
        ts.push_str("  const key = makeChineseKey(a, b);\n");
        ts.push_str("  return chineseConnectionBlurbs[key] ?? null;\n");
        ts.push_str("}\n");
        ts
    }
}

/// `export type ChineseAnimal = | "Rat" | ... ;`, wrapped four names per line.
fn write_sign_type(ts: &mut String) {
    ts.push_str("export type ChineseAnimal =\n");
    let lines: Vec<String> = Sign::all()
        .chunks(SIGNS_PER_LINE)
        .map(|chunk| {
            let members: Vec<String> = chunk
                .iter()
                .map(|sign| format!("| {}", ts_string_literal(sign.name())))
                .collect();
            format!("  {}", members.join(" "))
        })
        .collect();
    ts.push_str(&lines.join("\n"));
    ts.push_str(";\n");
}

fn write_table(ts: &mut String, table: &CompatTable) {
    ts.push_str(
        "export const chineseConnectionBlurbs: Record<string, ChineseCompatibilityBlurb> = {\n",
    );
    let count = table.len();
    for (i, (key, entry)) in table.iter().enumerate() {
        ts.push_str(&format!("  {}: {{\n", ts_string_literal(key.as_str())));
        ts.push_str(&format!("    heading: {},\n", ts_string_literal(&entry.heading)));
        ts.push_str(&format!("    tagline: {},\n", ts_string_literal(&entry.tagline)));
        ts.push_str(&format!(
            "    description: {}\n",
            ts_string_literal(&entry.description)
        ));
        ts.push_str(if i + 1 < count { "  },\n" } else { "  }\n" });
    }
    ts.push_str("};\n");
}

#[cfg(test)]
#[path = "tests/typescript_tests.rs"]
mod tests;
