//! Reducer behavior: one message in, new state and effects out.

use mrs_app::{
    AppState, DataMessage, Effect, HistoryMessage, Message, Page, ReportMessage, UpdateMessage,
    reduce,
};
use mrs_model::{GroupedData, Measure, MeasureGroup};
use mrs_persistence::{AppConfiguration, HistoryEntry, HistoryEvent, HistoryRecord};
use mrs_updater::{
    ReplacementWorker, Result as UpdateResult, UpdateSignal, UpdateState, WorkerId, WorkerMessage,
    WorkerState,
};

fn model() -> GroupedData {
    GroupedData::new(vec![
        MeasureGroup::new("G1", vec![Measure::new(1, 10.1), Measure::new(2, 9.8)]),
        MeasureGroup::new("G2", vec![Measure::new(1, 4.0)]),
    ])
    .expect("valid model")
}

fn apply(state: AppState, message: Message) -> (AppState, Vec<Effect>) {
    let transition = reduce(state, message);
    (transition.state, transition.effects)
}

fn imported() -> AppState {
    apply(AppState::new(), Message::import(model())).0
}

#[derive(Debug)]
struct QuietWorker(u64);

impl ReplacementWorker for QuietWorker {
    fn id(&self) -> WorkerId {
        WorkerId(self.0)
    }

    fn post_message(&self, _message: WorkerMessage) -> UpdateResult<()> {
        Ok(())
    }
}

#[test]
fn starts_on_import_page_without_model() {
    let state = AppState::new();
    assert_eq!(state.page, Page::Import);
    assert!(state.model().is_none());
    assert!(!state.navigation().enable_data_and_report);
    assert!(state.report.use_error_for_referential);
    assert!(state.report.display_conditional_formatting);
}

#[test]
fn import_resets_selection_and_shows_raw_data() {
    let mut state = imported();
    state.apply(Message::Data(DataMessage::SelectGroup(Some("G2".into()))));
    state.apply(Message::Data(DataMessage::Scrolled {
        page: Page::Raw,
        offset: 120.0,
    }));
    state.apply(Message::Navigate(Page::Help));
    assert_eq!(state.ui.selected_group.as_deref(), Some("G2"));

    let (state, effects) = apply(state, Message::import(model().toggled("G1", 1)));

    assert_eq!(state.page, Page::Raw);
    assert_eq!(state.ui.selected_group, None);
    assert_eq!(state.ui.scroll_offset(Page::Raw), 0.0);
    assert!(state.navigation().enable_data_and_report);
    assert_eq!(
        effects,
        [Effect::AppendHistory(HistoryRecord::new(
            HistoryEvent::Imported,
            model().toggled("G1", 1)
        ))]
    );
}

#[test]
fn toggle_flips_one_measure_and_records_it() {
    let (state, effects) = apply(imported(), Message::toggle_ignored("G1", 2));

    let current = state.model().expect("model");
    assert!(current.measure("G1", 2).expect("measure").ignored);
    assert!(!current.measure("G1", 1).expect("measure").ignored);
    assert_eq!(current.group("G2"), model().group("G2"));
    assert_eq!(state.page, Page::Raw);
    assert_eq!(
        effects,
        [Effect::AppendHistory(HistoryRecord::new(
            HistoryEvent::MeasureToggled {
                group: "G1".into(),
                measure_id: 2,
                ignored: true,
            },
            current.clone(),
        ))]
    );
}

#[test]
fn toggle_misses_change_nothing() {
    let before = imported();
    let snapshot = before.model().cloned();

    let (after, effects) = apply(before, Message::toggle_ignored("G9", 1));
    assert!(effects.is_empty());
    assert_eq!(after.model().cloned(), snapshot);

    let (after, effects) = apply(after, Message::toggle_ignored("G1", 99));
    assert!(effects.is_empty());
    assert_eq!(after.model().cloned(), snapshot);
}

#[test]
fn toggle_without_model_is_ignored() {
    let (state, effects) = apply(AppState::new(), Message::toggle_ignored("G1", 1));
    assert!(effects.is_empty());
    assert!(state.model().is_none());
}

#[test]
fn back_to_back_toggles_compose() {
    let mut state = imported();
    state.apply(Message::toggle_ignored("G1", 1));
    state.apply(Message::toggle_ignored("G1", 2));
    state.apply(Message::toggle_ignored("G1", 1));

    let current = state.model().expect("model");
    assert!(!current.measure("G1", 1).expect("measure").ignored);
    assert!(current.measure("G1", 2).expect("measure").ignored);
}

#[test]
fn data_pages_need_a_model() {
    let (state, effects) = apply(AppState::new(), Message::Navigate(Page::Raw));
    assert_eq!(state.page, Page::Import);
    assert!(effects.is_empty());

    let (state, _) = apply(state, Message::Navigate(Page::Report));
    assert_eq!(state.page, Page::Import);

    let (state, effects) = apply(state, Message::Navigate(Page::Help));
    assert_eq!(state.page, Page::Help);
    assert!(effects.is_empty());
}

#[test]
fn navigation_never_touches_the_model() {
    let mut state = imported();
    let snapshot = state.model().cloned();
    for page in Page::all() {
        state.apply(Message::Navigate(*page));
        assert_eq!(state.page, *page);
        assert_eq!(state.model().cloned(), snapshot);
    }
}

#[test]
fn entering_history_requests_a_fresh_list() {
    let (state, effects) = apply(AppState::new(), Message::Navigate(Page::History));
    assert_eq!(effects, [Effect::LoadHistory]);
    assert!(state.history.is_loading);

    let (state, effects) = apply(state, Message::History(HistoryMessage::Loaded(Ok(Vec::new()))));
    assert!(effects.is_empty());
    assert!(!state.history.is_loading);

    let (state, _) = apply(
        state,
        Message::History(HistoryMessage::Loaded(Err("disk gone".into()))),
    );
    assert_eq!(state.history.error.as_deref(), Some("disk gone"));
}

#[test]
fn entering_report_reads_configuration() {
    let (state, effects) = apply(imported(), Message::Navigate(Page::Report));
    assert_eq!(effects, [Effect::LoadConfiguration]);
    assert!(state.report_inputs().is_none());

    let mut config = AppConfiguration::default();
    config.referential.name = "bench".into();
    let (state, _) = apply(
        state,
        Message::Report(ReportMessage::ConfigurationLoaded(Ok(config.clone()))),
    );
    let inputs = state.report_inputs().expect("report inputs");
    assert_eq!(inputs.configuration, &config);
}

#[test]
fn unreadable_configuration_falls_back_to_defaults() {
    let (state, _) = apply(imported(), Message::Navigate(Page::Report));
    let (state, _) = apply(
        state,
        Message::Report(ReportMessage::ConfigurationLoaded(Err("bad toml".into()))),
    );
    assert_eq!(
        state.report.configuration,
        Some(AppConfiguration::default())
    );
    assert_eq!(state.report.configuration_error.as_deref(), Some("bad toml"));
}

#[test]
fn report_toggles_leave_model_alone() {
    let state = imported();
    let snapshot = state.model().cloned();

    let (state, effects) = apply(
        state,
        Message::Report(ReportMessage::ToggleUseErrorForReferential),
    );
    assert!(effects.is_empty());
    assert!(!state.report.use_error_for_referential);

    let (state, _) = apply(
        state,
        Message::Report(ReportMessage::ToggleConditionalFormatting),
    );
    assert!(!state.report.display_conditional_formatting);
    assert!(!state.report.use_error_for_referential);
    assert_eq!(state.model().cloned(), snapshot);
}

#[test]
fn fullscreen_toggle_asks_the_host() {
    let (state, effects) = apply(AppState::new(), Message::ToggleFullscreen);
    assert_eq!(effects, [Effect::SetFullscreen(true)]);
    let (state, effects) = apply(state, Message::ToggleFullscreen);
    assert_eq!(effects, [Effect::SetFullscreen(false)]);
    assert!(!state.ui.is_fullscreen);
}

#[test]
fn selecting_unknown_group_is_ignored() {
    let (state, _) = apply(
        imported(),
        Message::Data(DataMessage::SelectGroup(Some("nope".into()))),
    );
    assert_eq!(state.ui.selected_group, None);
    let view = state.raw_data_view().expect("raw view");
    assert_eq!(view.visible_group().map(|g| g.name.as_str()), Some("G1"));
}

#[test]
fn reopen_imports_a_past_snapshot() {
    let earlier = model().toggled("G2", 1);
    let entry = HistoryEntry::stamp(3, HistoryRecord::new(HistoryEvent::Imported, earlier.clone()));

    let (state, _) = apply(AppState::new(), Message::Navigate(Page::History));
    let (state, _) = apply(
        state,
        Message::History(HistoryMessage::Loaded(Ok(vec![entry]))),
    );
    let (state, effects) = apply(state, Message::History(HistoryMessage::Reopen { sequence: 3 }));

    assert_eq!(state.page, Page::Raw);
    assert_eq!(state.model(), Some(&earlier));
    assert_eq!(
        effects,
        [Effect::AppendHistory(HistoryRecord::new(
            HistoryEvent::Reopened { source_sequence: 3 },
            earlier
        ))]
    );

    let (_, effects) = apply(state, Message::History(HistoryMessage::Reopen { sequence: 8 }));
    assert!(effects.is_empty());
}

#[test]
fn update_lifecycle_produces_one_reload() {
    let state = imported();
    let snapshot = state.model().cloned();

    let (state, effects) = apply(
        state,
        Message::Update(UpdateMessage::Signal(UpdateSignal::ReplacementWaiting(
            Box::new(QuietWorker(5)),
        ))),
    );
    assert!(effects.is_empty());
    assert!(state.show_update_prompt());
    assert_eq!(state.updates.state(), UpdateState::UpdateAvailable);

    let (state, effects) = apply(state, Message::Update(UpdateMessage::Confirm));
    assert_eq!(effects, [Effect::PostSkipWaiting]);
    assert_eq!(state.updates.state(), UpdateState::Updating);

    let activated = || {
        Message::Update(UpdateMessage::Signal(UpdateSignal::WorkerStateChanged {
            worker: WorkerId(5),
            state: WorkerState::Activated,
        }))
    };
    let (state, effects) = apply(state, activated());
    assert_eq!(effects, [Effect::Reload]);
    let (state, effects) = apply(state, activated());
    assert!(effects.is_empty());
    assert_eq!(state.model().cloned(), snapshot);
}

#[test]
fn dismissing_the_prompt_only_hides_it() {
    let (state, _) = apply(
        AppState::new(),
        Message::Update(UpdateMessage::Signal(UpdateSignal::ReplacementWaiting(
            Box::new(QuietWorker(1)),
        ))),
    );
    let (state, effects) = apply(state, Message::Update(UpdateMessage::Dismiss));

    assert!(effects.is_empty());
    assert!(!state.show_update_prompt());
    assert!(state.navigation().update_prompt_hidden);
    assert_eq!(state.updates.state(), UpdateState::UpdateAvailable);
    assert!(state.updates.pending().is_some());
}
