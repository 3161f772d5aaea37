use super::*;

fn raw(measurements: serde_json::Value) -> RawMeasurements {
    serde_json::from_value(measurements).unwrap()
}

// =============================================================
// Cut label precedence
// =============================================================

#[test]
fn cut_label_prefers_leather_cut() {
    let normalized = normalize(&raw(serde_json::json!({
        "leather_cut": "331.0 x 309.0",
        "width": 300,
        "height": 400,
    })));
    assert_eq!(normalized.cut_label, "331.0 x 309.0");
}

#[test]
fn cut_label_synthesized_from_width_and_height() {
    let normalized = normalize(&raw(serde_json::json!({"width": 300, "height": 400})));
    assert_eq!(normalized.cut_label, "300 x 400");
}

#[test]
fn cut_label_synthesis_keeps_string_figures_verbatim() {
    let normalized = normalize(&raw(serde_json::json!({"width": "331.0", "height": "309.0"})));
    assert_eq!(normalized.cut_label, "331.0 x 309.0");
}

#[test]
fn cut_label_empty_when_nothing_usable() {
    let normalized = normalize(&raw(serde_json::json!({"width": 300})));
    assert_eq!(normalized.cut_label, "");
}

// =============================================================
// Hub sequence precedence
// =============================================================

#[test]
fn hubs_win_over_spine_hubs_when_both_present() {
    let normalized = normalize(&raw(serde_json::json!({
        "hubs": [10],
        "spine_hubs": [20, 30],
    })));
    assert_eq!(normalized.hubs.len(), 1);
    assert_eq!(normalized.hubs[0].label(), "Hub: 10 mm");
}

#[test]
fn spine_hubs_used_when_hubs_absent() {
    let normalized = normalize(&raw(serde_json::json!({"spine_hubs": [{"index": 1, "position": 51.5}]})));
    assert_eq!(normalized.hubs.len(), 1);
    assert_eq!(normalized.hubs[0].label(), "Hub 1: 51.5 mm");
}

#[test]
fn hubs_default_to_empty_when_neither_present() {
    let normalized = normalize(&raw(serde_json::json!({})));
    assert!(normalized.hubs.is_empty());
}

// =============================================================
// Per-entry shape branching
// =============================================================

#[test]
fn mixed_entry_shapes_normalize_in_order() {
    let normalized = normalize(&raw(serde_json::json!({
        "hubs": [{"index": 1, "position": 30}, 45],
    })));
    let labels: Vec<String> = normalized.hubs.iter().map(Hub::label).collect();
    assert_eq!(labels, ["Hub 1: 30 mm", "Hub: 45 mm"]);
}

#[test]
fn string_positions_render_verbatim() {
    let normalized = normalize(&raw(serde_json::json!({
        "hubs": [{"index": 2, "position": "61.7"}, "92.5"],
    })));
    let labels: Vec<String> = normalized.hubs.iter().map(Hub::label).collect();
    assert_eq!(labels, ["Hub 2: 61.7 mm", "Hub: 92.5 mm"]);
}

#[test]
fn object_entry_without_index_renders_bare() {
    let normalized = normalize(&raw(serde_json::json!({"hubs": [{"position": 44}]})));
    assert_eq!(normalized.hubs[0].label(), "Hub: 44 mm");
}

#[test]
fn object_entry_without_position_coerces_to_zero() {
    let normalized = normalize(&raw(serde_json::json!({"hubs": [{"index": 3}]})));
    assert_eq!(normalized.hubs[0].label(), "Hub 3: 0 mm");
}

#[test]
fn unusable_entries_are_dropped() {
    let normalized = normalize(&raw(serde_json::json!({
        "hubs": [null, true, [1, 2], {"index": 1, "position": 30}],
    })));
    let labels: Vec<String> = normalized.hubs.iter().map(Hub::label).collect();
    assert_eq!(labels, ["Hub 1: 30 mm"]);
}

// =============================================================
// Materials passthrough
// =============================================================

#[test]
fn materials_carried_through_when_present() {
    let normalized = normalize(&raw(serde_json::json!({
        "materials": {
            "leather_area_cm2": 1022.8,
            "leather_area_sqft": "1.10",
            "boards_area_cm2": 708.9,
        },
    })));
    let materials = normalized.materials.unwrap();
    assert_eq!(materials.leather_area_cm2, Some(Measure::Number(1022.8)));
    assert_eq!(
        materials.leather_area_sqft,
        Some(Measure::Text("1.10".to_owned()))
    );
}

#[test]
fn materials_absent_stays_absent() {
    let normalized = normalize(&raw(serde_json::json!({"width": 300, "height": 400})));
    assert!(normalized.materials.is_none());
}
