//! Property-based tests for tab registry operations.
//!
//! For any sequence of opens, closes and switches after startup:
//! - at least one tab remains,
//! - exactly one tab is active and visible,
//! - a newly opened tab is active,
//! - the address field shows the active tab's address.

use proptest::prelude::*;
use stark_browser::managers::tab_manager::TabManagerTrait;
use stark_browser::types::command::ShellCommand;
use stark_browser::types::config::BrowserConfig;
use stark_browser::view::headless::HeadlessBrowser;

#[derive(Debug, Clone)]
enum TabOp {
    Open(Option<String>),
    Close(usize),
    CloseActive,
    Switch(usize),
}

fn arb_tab_ops() -> impl Strategy<Value = Vec<TabOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => proptest::option::of("https://[a-z]{3,8}\\.com").prop_map(TabOp::Open),
            2 => (0..20usize).prop_map(TabOp::Close),
            1 => Just(TabOp::CloseActive),
            2 => (0..20usize).prop_map(TabOp::Switch),
        ],
        1..40,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn tab_registry_invariants_hold(ops in arb_tab_ops()) {
        let mut browser = HeadlessBrowser::new(BrowserConfig::default());
        let mut expected_count = 1usize;

        for op in &ops {
            let tabs = browser.shell().chrome_state().tabs;
            let state = match op {
                TabOp::Open(url) => {
                    let state = browser.dispatch(ShellCommand::NewTab { url: url.clone() });
                    expected_count += 1;
                    let newest = state.tabs.last().map(|t| t.id.clone());
                    prop_assert_eq!(&state.active_id, &newest);
                    state
                }
                TabOp::Close(idx) => {
                    let id = tabs[idx % tabs.len()].id.clone();
                    if tabs.len() > 1 {
                        expected_count -= 1;
                    }
                    browser.dispatch(ShellCommand::CloseTab { id })
                }
                TabOp::CloseActive => {
                    if tabs.len() > 1 {
                        expected_count -= 1;
                    }
                    browser.dispatch(ShellCommand::CloseActiveTab)
                }
                TabOp::Switch(idx) => {
                    let id = tabs[idx % tabs.len()].id.clone();
                    let state = browser.dispatch(ShellCommand::SwitchTab { id: id.clone() });
                    prop_assert_eq!(state.active_id.as_ref(), Some(&id));
                    state
                }
            };

            prop_assert_eq!(state.tabs.len(), expected_count, "after {:?}", op);
            prop_assert!(state.tabs.len() >= 1);

            let active = state.active_id.clone();
            prop_assert!(active.is_some());
            let active_info = state.tabs.iter().find(|t| Some(&t.id) == active.as_ref());
            prop_assert!(active_info.is_some());
            prop_assert_eq!(&state.address, &active_info.unwrap().address);

            let registry = browser.shell().navigation.tabs();
            let visible: Vec<_> = state
                .tabs
                .iter()
                .filter(|t| registry.get_tab(&t.id).map(|tab| tab.view.is_visible()).unwrap_or(false))
                .map(|t| t.id.clone())
                .collect();
            prop_assert_eq!(visible, vec![active.unwrap()]);
        }
    }
}
