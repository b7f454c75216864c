use std::io::{self, Write};

use srim_input::{Ion, Material, Target};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_run_summary(ion: &Ion, target: &Target) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let mut rows = vec![
        ("Ion", format!("{} (Z = {})", ion.symbol(), ion.atomic_number())),
        ("Mass (amu)", format!("{:.3}", ion.mass())),
        ("Energy (keV)", format!("{}", ion.energy_kev())),
        ("Layers", format!("{}", target.layer_count())),
        ("Target atoms", format!("{}", target.element_count())),
        ("Depth (Å)", format!("{}", target.total_width())),
    ];
    for layer in target.layers() {
        rows.push(("Layer", format!("{} ({} Å)", layer.name(), layer.width())));
    }

    write_kv_table(&mut out, "Run Summary", &rows);
}

pub fn print_composition(material: &Material) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows = vec![
        ("Formula", material.chemical_formula()),
        ("Density (g/cm³)", format!("{}", material.density())),
        ("Phase", material.phase().to_string()),
    ];
    write_kv_table(&mut out, "Material", &rows);
    write_composition_table(&mut out, material);
}

fn write_composition_table(out: &mut impl Write, material: &Material) {
    let el_w = 7usize;
    let num_w = 9usize;
    let line = |left: &str, mid: &str, right: &str| {
        format!(
            "{INDENT}{left}{}{mid}{n}{mid}{n}{mid}{n}{mid}{n}{right}",
            "─".repeat(el_w + 2),
            n = "─".repeat(num_w + 2),
        )
    };

    let _ = writeln!(out, "{}┌─ Composition ─┐", INDENT);
    let _ = writeln!(out, "{}", line("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "{}│ {:<el_w$} │ {:>num_w$} │ {:>num_w$} │ {:>num_w$} │ {:>num_w$} │",
        INDENT, "Element", "Stoich", "E_d (eV)", "Lattice", "Surface",
    );
    let _ = writeln!(out, "{}", line("├", "┼", "┤"));

    for entry in material.elements() {
        let _ = writeln!(
            out,
            "{}│ {:<el_w$} │ {:>num_w$.4} │ {:>num_w$.2} │ {:>num_w$.2} │ {:>num_w$.2} │",
            INDENT,
            entry.element.symbol(),
            entry.stoich,
            entry.displacement,
            entry.lattice,
            entry.surface,
        );
    }

    let _ = writeln!(out, "{}", line("└", "┴", "┘"));
}

fn write_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use srim_input::Phase;

    #[test]
    fn composition_table_lists_elements_in_order() {
        let material = Material::from_formula("Al2O3", 3.95, Phase::Solid).unwrap();
        let mut buf = Vec::new();
        write_composition_table(&mut buf, &material);
        let text = String::from_utf8(buf).unwrap();

        let rows: Vec<&str> = text.lines().filter(|l| l.contains("│ Al") || l.contains("│ O ")).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("Al"));
        assert!(rows[0].contains("0.4000"));
        assert!(rows[1].contains("0.6000"));
    }

    #[test]
    fn kv_rows_are_truncated_to_width() {
        let mut buf = Vec::new();
        let long = "x".repeat(100);
        write_kv_table(&mut buf, "Title", &[("Key", long)]);
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains('…'));
        let widths: Vec<usize> = text.lines().skip(1).map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}
