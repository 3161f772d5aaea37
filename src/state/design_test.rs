use super::*;

fn collection_with(n_text: usize, n_stamps: usize) -> DesignState {
    let mut state = DesignState::default();
    for _ in 0..n_text {
        state.apply(DesignOp::AddText).unwrap();
    }
    for _ in 0..n_stamps {
        state.apply(DesignOp::AddStamp).unwrap();
    }
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn design_state_default_is_empty() {
    let state = DesignState::default();
    assert!(state.elements.is_empty());
    assert_eq!(state.border_inset, "0");
}

#[test]
fn add_text_appends_standard_defaults() {
    let mut state = DesignState::default();
    state.apply(DesignOp::AddText).unwrap();
    assert_eq!(
        state.elements,
        vec![DesignElement::Text {
            content: "Label".to_owned(),
            x: 50.0,
            y: 50.0,
            font_size: 12.0,
        }]
    );
}

#[test]
fn add_stamp_appends_standard_defaults() {
    let mut state = DesignState::default();
    state.apply(DesignOp::AddStamp).unwrap();
    assert_eq!(
        state.elements,
        vec![DesignElement::Stamp {
            motif: Motif::Acorn,
            x: 50.0,
            y: 50.0,
            scale: 1.0,
        }]
    );
}

// =============================================================
// Length and ordering contracts
// =============================================================

#[test]
fn add_grows_by_one_update_by_zero_remove_shrinks_by_one() {
    let mut state = DesignState::default();

    state.apply(DesignOp::AddText).unwrap();
    assert_eq!(state.elements.len(), 1);

    state.apply(DesignOp::AddStamp).unwrap();
    assert_eq!(state.elements.len(), 2);

    state
        .apply(DesignOp::Update {
            index: 0,
            field: Field::X,
            value: "10".to_owned(),
        })
        .unwrap();
    assert_eq!(state.elements.len(), 2);

    state.apply(DesignOp::Remove { index: 0 }).unwrap();
    assert_eq!(state.elements.len(), 1);
}

#[test]
fn update_does_not_reorder_elements() {
    let mut state = collection_with(2, 1);
    state
        .apply(DesignOp::Update {
            index: 1,
            field: Field::Content,
            value: "Spine".to_owned(),
        })
        .unwrap();

    assert_eq!(state.elements[0], DesignElement::new_text());
    assert_eq!(
        state.elements[1],
        DesignElement::Text {
            content: "Spine".to_owned(),
            x: 50.0,
            y: 50.0,
            font_size: 12.0,
        }
    );
    assert_eq!(state.elements[2].kind(), "stamp");
}

#[test]
fn remove_shifts_later_elements_down_unchanged() {
    let mut state = collection_with(3, 2);
    // Tag each element so the shift is observable.
    for i in 0..3 {
        state
            .apply(DesignOp::Update {
                index: i,
                field: Field::X,
                value: format!("{i}"),
            })
            .unwrap();
    }
    state
        .apply(DesignOp::Update {
            index: 3,
            field: Field::Scale,
            value: "3".to_owned(),
        })
        .unwrap();
    state
        .apply(DesignOp::Update {
            index: 4,
            field: Field::Scale,
            value: "4".to_owned(),
        })
        .unwrap();

    let before = state.elements.clone();
    state.apply(DesignOp::Remove { index: 1 }).unwrap();

    assert_eq!(state.elements.len(), 4);
    assert_eq!(state.elements[0], before[0]);
    assert_eq!(state.elements[1], before[2]);
    assert_eq!(state.elements[2], before[3]);
    assert_eq!(state.elements[3], before[4]);
}

// =============================================================
// Numeric coercion
// =============================================================

#[test]
fn update_x_with_garbage_stores_zero() {
    let mut state = collection_with(1, 0);
    state
        .apply(DesignOp::Update {
            index: 0,
            field: Field::X,
            value: "abc".to_owned(),
        })
        .unwrap();
    assert!(matches!(state.elements[0], DesignElement::Text { x, .. } if x == 0.0));
}

#[test]
fn update_numeric_fields_parse_floats() {
    let mut state = collection_with(0, 1);
    state
        .apply(DesignOp::Update {
            index: 0,
            field: Field::Scale,
            value: " 1.75 ".to_owned(),
        })
        .unwrap();
    state
        .apply(DesignOp::Update {
            index: 0,
            field: Field::Y,
            value: "-12.5".to_owned(),
        })
        .unwrap();
    assert_eq!(
        state.elements[0],
        DesignElement::Stamp {
            motif: Motif::Acorn,
            x: 50.0,
            y: -12.5,
            scale: 1.75,
        }
    );
}

#[test]
fn update_rejects_non_finite_numbers_as_zero() {
    let mut state = collection_with(1, 0);
    for raw in ["inf", "-inf", "NaN", ""] {
        state
            .apply(DesignOp::Update {
                index: 0,
                field: Field::FontSize,
                value: raw.to_owned(),
            })
            .unwrap();
        assert!(
            matches!(state.elements[0], DesignElement::Text { font_size, .. } if font_size == 0.0),
            "input {raw:?} should coerce to 0",
        );
    }
}

#[test]
fn update_content_stores_raw_value_verbatim() {
    let mut state = collection_with(1, 0);
    state
        .apply(DesignOp::Update {
            index: 0,
            field: Field::Content,
            value: "  12abc  ".to_owned(),
        })
        .unwrap();
    assert!(
        matches!(&state.elements[0], DesignElement::Text { content, .. } if content == "  12abc  ")
    );
}

// =============================================================
// Motif edits
// =============================================================

#[test]
fn update_motif_accepts_wire_names() {
    let mut state = collection_with(0, 1);
    state
        .apply(DesignOp::Update {
            index: 0,
            field: Field::Motif,
            value: "fleuron".to_owned(),
        })
        .unwrap();
    assert!(matches!(
        state.elements[0],
        DesignElement::Stamp {
            motif: Motif::Fleuron,
            ..
        }
    ));
}

#[test]
fn update_motif_rejects_unknown_names() {
    let mut state = collection_with(0, 1);
    let err = state
        .apply(DesignOp::Update {
            index: 0,
            field: Field::Motif,
            value: "dragon".to_owned(),
        })
        .unwrap_err();
    assert_eq!(err, DesignError::UnknownMotif("dragon".to_owned()));
    assert!(matches!(
        state.elements[0],
        DesignElement::Stamp {
            motif: Motif::Acorn,
            ..
        }
    ));
}

#[test]
fn motif_parse_round_trips_wire_names() {
    for motif in Motif::ALL {
        assert_eq!(Motif::parse(motif.wire_name()), Some(motif));
    }
    assert_eq!(Motif::parse("Acorn"), None);
}

// =============================================================
// Guards
// =============================================================

#[test]
fn update_out_of_range_is_a_reported_no_op() {
    let mut state = collection_with(2, 0);
    let before = state.clone();
    let err = state
        .apply(DesignOp::Update {
            index: 2,
            field: Field::X,
            value: "1".to_owned(),
        })
        .unwrap_err();
    assert_eq!(err, DesignError::IndexOutOfRange { index: 2, len: 2 });
    assert_eq!(state, before);
}

#[test]
fn remove_out_of_range_is_a_reported_no_op() {
    let mut state = DesignState::default();
    let err = state.apply(DesignOp::Remove { index: 0 }).unwrap_err();
    assert_eq!(err, DesignError::IndexOutOfRange { index: 0, len: 0 });
    assert!(state.elements.is_empty());
}

#[test]
fn update_wrong_variant_field_is_a_reported_no_op() {
    let mut state = collection_with(1, 1);
    let before = state.clone();

    let err = state
        .apply(DesignOp::Update {
            index: 0,
            field: Field::Scale,
            value: "2".to_owned(),
        })
        .unwrap_err();
    assert_eq!(
        err,
        DesignError::FieldMismatch {
            field: Field::Scale,
            kind: "text",
        }
    );

    let err = state
        .apply(DesignOp::Update {
            index: 1,
            field: Field::Content,
            value: "x".to_owned(),
        })
        .unwrap_err();
    assert_eq!(
        err,
        DesignError::FieldMismatch {
            field: Field::Content,
            kind: "stamp",
        }
    );
    assert_eq!(state, before);
}

// =============================================================
// Payload shape
// =============================================================

#[test]
fn elements_serialize_as_tagged_shapes_with_exact_field_names() {
    let state = collection_with(1, 1);
    let json = serde_json::to_value(&state.elements).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"type": "text", "content": "Label", "x": 50.0, "y": 50.0, "font_size": 12.0},
            {"type": "stamp", "motif": "acorn", "x": 50.0, "y": 50.0, "scale": 1.0},
        ])
    );
}

#[test]
fn element_collection_round_trips_through_payload_shape() {
    let mut state = collection_with(2, 2);
    state
        .apply(DesignOp::Update {
            index: 1,
            field: Field::Content,
            value: "Ex Libris".to_owned(),
        })
        .unwrap();
    state
        .apply(DesignOp::Update {
            index: 3,
            field: Field::Motif,
            value: "corner".to_owned(),
        })
        .unwrap();

    let json = serde_json::to_string(&state.elements).unwrap();
    let back: Vec<DesignElement> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state.elements);
}
