//! Design overlay editor: one editable row per element.
//!
//! The row list is a single reactive projection of `DesignState` — every
//! mutation (add, edit, remove) recomputes all rows from the collection, so
//! row indices always match element indices and removals can never leave a
//! stale row behind. Edit controls commit on change through `DesignOp`;
//! rejected ops are logged and leave the collection untouched.

use leptos::prelude::*;

use crate::state::design::{DesignElement, DesignOp, DesignState, Field, Motif};

/// Design panel: add-element buttons, the border-inset field, and the
/// editable element rows.
#[component]
pub fn DesignPanel() -> impl IntoView {
    let design = expect_context::<RwSignal<DesignState>>();

    let on_add_text = move |_| apply_edit(design, DesignOp::AddText);
    let on_add_stamp = move |_| apply_edit(design, DesignOp::AddStamp);

    view! {
        <div class="design-panel">
            <div class="design-panel__header">
                <h3 class="design-panel__title">"Cover design"</h3>
                <div class="design-panel__actions">
                    <button type="button" class="btn" on:click=on_add_text>
                        "+ Text"
                    </button>
                    <button type="button" class="btn" on:click=on_add_stamp>
                        "+ Stamp"
                    </button>
                </div>
            </div>

            <label class="design-panel__field design-panel__border">
                "Border inset (mm)"
                <input
                    id="border_inset"
                    type="number"
                    prop:value=move || design.get().border_inset
                    on:change=move |ev| {
                        design.update(|d| d.border_inset = event_target_value(&ev));
                    }
                />
            </label>

            <div class="design-panel__list">
                {move || {
                    design
                        .get()
                        .elements
                        .iter()
                        .enumerate()
                        .map(|(index, elem)| element_row(index, elem.clone(), design))
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

/// One editable row: type label, remove button, per-variant fields.
fn element_row(index: usize, elem: DesignElement, design: RwSignal<DesignState>) -> impl IntoView {
    let kind_label = elem.kind().to_uppercase();
    let on_remove = move |_| apply_edit(design, DesignOp::Remove { index });

    let fields = match elem {
        DesignElement::Text {
            content,
            x,
            y,
            font_size,
        } => view! {
            <div class="design-panel__inputs">
                <label class="design-panel__field design-panel__field--wide">
                    "Content"
                    <input
                        type="text"
                        prop:value=content
                        on:change=move |ev| {
                            apply_edit(
                                design,
                                DesignOp::Update {
                                    index,
                                    field: Field::Content,
                                    value: event_target_value(&ev),
                                },
                            );
                        }
                    />
                </label>
                {numeric_input(design, index, Field::X, "X (mm)", x, "1")}
                {numeric_input(design, index, Field::Y, "Y (mm)", y, "1")}
                {numeric_input(design, index, Field::FontSize, "Size", font_size, "1")}
            </div>
        }
        .into_any(),
        DesignElement::Stamp {
            motif,
            x,
            y,
            scale,
        } => view! {
            <div class="design-panel__inputs">
                <label class="design-panel__field design-panel__field--wide">
                    "Motif"
                    <select on:change=move |ev| {
                        apply_edit(
                            design,
                            DesignOp::Update {
                                index,
                                field: Field::Motif,
                                value: event_target_value(&ev),
                            },
                        );
                    }>
                        {Motif::ALL
                            .into_iter()
                            .map(|m| {
                                view! {
                                    <option value=m.wire_name() selected=(m == motif)>
                                        {m.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                {numeric_input(design, index, Field::X, "X (mm)", x, "1")}
                {numeric_input(design, index, Field::Y, "Y (mm)", y, "1")}
                {numeric_input(design, index, Field::Scale, "Scale", scale, "0.1")}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="design-panel__item">
            <div class="design-panel__item-header">
                <span class="design-panel__kind">{kind_label}</span>
                <button type="button" class="btn btn--danger" on:click=on_remove>
                    "Remove"
                </button>
            </div>
            {fields}
        </div>
    }
}

/// Numeric field bound to one element field; commits on change.
fn numeric_input(
    design: RwSignal<DesignState>,
    index: usize,
    field: Field,
    label: &'static str,
    value: f64,
    step: &'static str,
) -> impl IntoView {
    view! {
        <label class="design-panel__field">
            {label}
            <input
                type="number"
                step=step
                prop:value=value.to_string()
                on:change=move |ev| {
                    apply_edit(
                        design,
                        DesignOp::Update {
                            index,
                            field,
                            value: event_target_value(&ev),
                        },
                    );
                }
            />
        </label>
    }
}

/// Apply one edit command, logging a rejection instead of applying it.
fn apply_edit(design: RwSignal<DesignState>, op: DesignOp) {
    design.update(|state| {
        if let Err(err) = state.apply(op) {
            leptos::logging::warn!("design edit rejected: {err}");
        }
    });
}
