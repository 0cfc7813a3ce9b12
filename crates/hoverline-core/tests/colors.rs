// File: crates/hoverline-core/tests/colors.rs
// Purpose: Qualitative color assignment order, wrap-around and duplicate handling.

use hoverline_core::color::in_palette;
use hoverline_core::{qualitative_colors, ChartError, ColorAssigner, HexColor, Hue};

fn hex(s: &str) -> HexColor {
    s.parse().expect("valid hex")
}

#[test]
fn walks_hues_before_shades() {
    let labels = ["A", "B", "C", "D", "E", "F", "G", "H"];
    let table = qualitative_colors(labels);

    let got: Vec<String> = labels.iter().map(|l| table[*l].color.to_string()).collect();
    assert_eq!(
        got,
        vec!["#20C4F4", "#FFC629", "#00E8AB", "#FF4438", "#0D09FF", "#B020F4", "#F420DF", "#47DAFF"]
    );
    // 8th label: second shade of the first hue in the order (cyan)
    assert_eq!(table["H"].color, Hue::Cyan.shades()[1]);
}

#[test]
fn one_entry_per_distinct_label_and_all_colors_from_palette() {
    let labels: Vec<String> = (0..50).map(|i| format!("series-{}", i % 20)).collect();
    let table = qualitative_colors(&labels);
    assert_eq!(table.len(), 20);
    for (label, a) in &table {
        assert_eq!(&a.label, label);
        assert!(!a.value);
        assert!(in_palette(a.color), "{} not in palette", a.color);
    }
}

#[test]
fn colors_only_repeat_after_palette_is_exhausted() {
    let labels: Vec<String> = (0..36).map(|i| i.to_string()).collect();
    let table = qualitative_colors(&labels);

    let first_35: std::collections::HashSet<HexColor> = labels[..35].iter().map(|l| table[l].color).collect();
    assert_eq!(first_35.len(), 35);
    // 36th restarts the whole cycle at hue 0, shade 0
    assert_eq!(table["35"].color, table["0"].color);
    assert_eq!(table["35"].color, hex("#20C4F4"));
}

#[test]
fn duplicates_keep_first_record() {
    let table = qualitative_colors(["a", "b", "a", "c"]);
    assert_eq!(table.len(), 3);
    assert_eq!(table["a"].id, "0");
    assert_eq!(table["b"].id, "1");
    assert_eq!(table["c"].id, "3");
    assert_eq!(table["a"].color, hex("#20C4F4"));
    assert_eq!(table["c"].color, hex("#00E8AB"));
    let order: Vec<&str> = table.keys().map(|k| k.as_str()).collect();
    assert_eq!(order, vec!["a", "b", "c"]);
}

#[test]
fn custom_hue_order() {
    let assigner = ColorAssigner::with_hue_order(vec![Hue::Red, Hue::Blue]).unwrap();
    let table = assigner.assign(["x", "y", "z"]);
    assert_eq!(table["x"].color, hex("#FF4438"));
    assert_eq!(table["y"].color, hex("#0D09FF"));
    assert_eq!(table["z"].color, hex("#EC6858"));
}

#[test]
fn single_hue_restarts_after_its_shades() {
    let assigner = ColorAssigner::with_hue_order(vec![Hue::Pink]).unwrap();
    let labels = ["1", "2", "3", "4", "5", "6"];
    let table = assigner.assign(labels);
    for (i, l) in labels[..5].iter().enumerate() {
        assert_eq!(table[*l].color, Hue::Pink.shades()[i]);
    }
    assert_eq!(table["6"].color, Hue::Pink.shades()[0]);
}

#[test]
fn empty_inputs() {
    assert!(qualitative_colors(Vec::<String>::new()).is_empty());
    assert!(matches!(ColorAssigner::with_hue_order(Vec::new()), Err(ChartError::EmptyHueOrder)));
}

#[test]
fn hue_and_hex_parsing() {
    assert_eq!("CYAN".parse::<Hue>().unwrap(), Hue::Cyan);
    assert!(matches!("orange".parse::<Hue>(), Err(ChartError::UnknownHue(_))));
    assert_eq!(hex("#20c4f4"), HexColor(0x20C4F4));
    assert_eq!(HexColor(0x00E8AB).to_string(), "#00E8AB");
    assert!("#12345".parse::<HexColor>().is_err());
    assert!("zzzzzz".parse::<HexColor>().is_err());
}
