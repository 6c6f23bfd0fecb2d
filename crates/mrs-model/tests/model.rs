//! Tests for mrs-model edit operations.

use mrs_model::{GroupedData, Measure, MeasureGroup, ToggleOutcome};
use proptest::prelude::*;

fn two_groups() -> GroupedData {
    GroupedData::new(vec![
        MeasureGroup::new(
            "A",
            vec![
                Measure::new(1, 0.5),
                Measure::new(2, 0.7).with_field("unit", serde_json::json!("mg")),
                Measure::new(3, 0.9).with_ignored(true),
            ],
        ),
        MeasureGroup::new("B", vec![Measure::new(1, 4.0), Measure::new(2, 5.0)]),
    ])
    .expect("valid model")
}

#[test]
fn toggle_flips_only_the_target() {
    let model = GroupedData::new(vec![MeasureGroup::new(
        "G1",
        vec![Measure::new(1, 1.0), Measure::new(2, 2.0)],
    )])
    .expect("valid model");

    let expected = GroupedData::new(vec![MeasureGroup::new(
        "G1",
        vec![Measure::new(1, 1.0), Measure::new(2, 2.0).with_ignored(true)],
    )])
    .expect("valid model");

    assert_eq!(model.toggled("G1", 2), expected);
}

#[test]
fn toggle_isolation_between_groups() {
    let model = two_groups();
    let next = model.toggled("A", 2);

    assert_eq!(next.group("B"), model.group("B"));
    assert_eq!(next.measure("A", 1), model.measure("A", 1));
    assert_eq!(next.measure("A", 3), model.measure("A", 3));

    let before = model.measure("A", 2).expect("measure");
    let after = next.measure("A", 2).expect("measure");
    assert_eq!(before.id, after.id);
    assert_eq!(before.value, after.value);
    assert_eq!(before.extra, after.extra);
    assert_ne!(before.ignored, after.ignored);
}

#[test]
fn toggle_misses_return_same_model() {
    let model = two_groups();
    assert_eq!(model.toggled("unknown-group", 1), model);
    assert_eq!(model.toggled("A", 99_999), model);
    assert!(!model.toggle_ignored("A", 99_999).is_toggled());
}

#[test]
fn toggle_preserves_order() {
    let model = two_groups();
    let next = model.toggled("A", 1).toggled("B", 2);

    let names: Vec<_> = next.group_names().collect();
    assert_eq!(names, ["A", "B"]);
    let ids: Vec<_> = next
        .group("A")
        .expect("group")
        .measures
        .iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, [1, 2, 3]);
}

#[test]
fn toggle_outcome_reports_new_value() {
    let model = two_groups();
    match model.toggle_ignored("A", 3) {
        ToggleOutcome::Toggled { ignored, .. } => assert!(!ignored),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn json_round_trip_keeps_flags() {
    let model = two_groups().toggled("B", 1);
    let json = serde_json::to_string(&model).expect("serialize model");
    let back: GroupedData = serde_json::from_str(&json).expect("deserialize model");
    assert_eq!(back, model);
    assert!(back.measure("B", 1).expect("measure").ignored);
}

fn arb_model() -> impl Strategy<Value = GroupedData> {
    prop::collection::btree_map(
        "[A-Z]{1,3}",
        prop::collection::btree_map(0u32..50, (-1000.0f64..1000.0, any::<bool>()), 0..8),
        1..5,
    )
    .prop_map(|groups| {
        let groups = groups
            .into_iter()
            .map(|(name, measures)| {
                let measures = measures
                    .into_iter()
                    .map(|(id, (value, ignored))| Measure::new(id, value).with_ignored(ignored))
                    .collect();
                MeasureGroup::new(name, measures)
            })
            .collect();
        GroupedData::new(groups).expect("unique keys")
    })
}

proptest! {
    #[test]
    fn double_toggle_is_identity(model in arb_model(), pick in any::<prop::sample::Index>()) {
        let targets: Vec<(String, u32)> = model
            .groups()
            .flat_map(|g| g.measures.iter().map(move |m| (g.name.clone(), m.id)))
            .collect();
        prop_assume!(!targets.is_empty());
        let (group, id) = &targets[pick.index(targets.len())];

        let once = model.toggled(group, *id);
        prop_assert_ne!(&once, &model);
        prop_assert_eq!(once.toggled(group, *id), model);
    }

    #[test]
    fn toggle_never_touches_other_groups(model in arb_model(), pick in any::<prop::sample::Index>()) {
        let names: Vec<String> = model.group_names().map(str::to_owned).collect();
        let name = &names[pick.index(names.len())];
        let Some(first) = model.group(name).and_then(|g| g.measures.first()) else {
            return Ok(());
        };

        let next = model.toggled(name, first.id);
        for other in names.iter().filter(|n| *n != name) {
            prop_assert_eq!(next.group(other), model.group(other));
        }
        prop_assert_eq!(next.summary().measures, model.summary().measures);
    }
}
