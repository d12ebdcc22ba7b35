use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{abortable, AbortHandle};
use gloo_timers::future::TimeoutFuture;
use log::{debug, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::Window;
use yew::prelude::*;

use crate::config;
use crate::listener::Subscription;
use crate::navigation::anchor::{scroll_target, AnchorNavigator};
use crate::navigation::header::{MenuAction, MenuState};
use crate::navigation::sections::{active_section, SectionBound, SectionId};

/// Shared anchor navigation, provided by the landing page to every link.
/// Any navigation closes the mobile menu, wherever the link lives.
#[derive(Clone, PartialEq)]
pub struct AnchorContext {
    pub active: Option<SectionId>,
    pub navigate: Callback<SectionId>,
    pub menu_open: bool,
    pub toggle_menu: Callback<()>,
}

pub fn current_scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

fn now_ms() -> f64 {
    web_sys::js_sys::Date::now()
}

fn section_top(window: &Window, id: SectionId) -> Option<f64> {
    let element = window.document()?.get_element_by_id(id.as_str())?;
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    Some(element.get_bounding_client_rect().top() + scroll_y)
}

fn measure_sections() -> Vec<SectionBound> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    SectionId::ALL
        .into_iter()
        .filter_map(|id| {
            let element = window.document()?.get_element_by_id(id.as_str())?;
            let rect = element.get_bounding_client_rect();
            Some(SectionBound {
                id,
                top: rect.top() + window.scroll_y().unwrap_or(0.0),
                height: rect.height(),
            })
        })
        .collect()
}

/// Subscribes `handler` to a window event for the lifetime of the component.
/// The listener is added once on mount and removed once on unmount.
#[hook]
pub fn use_window_event<F>(event: &'static str, handler: F)
where
    F: Fn() + 'static,
{
    use_effect_with_deps(
        move |_| {
            let subscription =
                web_sys::window().and_then(|window| match Subscription::new(window, event, handler) {
                    Ok(subscription) => Some(subscription),
                    Err(err) => {
                        warn!("{}", err);
                        None
                    }
                });
            move || drop(subscription)
        },
        (),
    );
}

async fn run_frames(
    window: Window,
    navigator: Rc<RefCell<AnchorNavigator>>,
    frame_loop: Rc<RefCell<Option<AbortHandle>>>,
) {
    loop {
        let step = navigator.borrow_mut().tick(now_ms());
        let Some(position) = step else {
            break;
        };
        window.scroll_to_with_x_and_y(0.0, position);
        TimeoutFuture::new(config::FRAME_INTERVAL_MS).await;
    }
    frame_loop.borrow_mut().take();
}

/// Section positions shift after mount (lazy images, fonts), so the spy
/// measures the layout it is about to compare against.
fn spy_active_section() -> Option<SectionId> {
    active_section(current_scroll_offset(), &measure_sections())
}

/// Section spy, mobile menu state and smooth anchor scrolling for the whole page.
#[hook]
pub fn use_anchor_navigation() -> AnchorContext {
    let active = use_state_eq(|| None::<SectionId>);
    let menu = use_reducer_eq(MenuState::default);
    let navigator = use_mut_ref(AnchorNavigator::default);
    let frame_loop = use_mut_ref(|| None::<AbortHandle>);

    {
        let active = active.clone();
        let frame_loop = frame_loop.clone();
        use_effect_with_deps(
            move |_| {
                active.set(spy_active_section());
                move || {
                    if let Some(handle) = frame_loop.borrow_mut().take() {
                        debug!("Cancelling anchor scroll on unmount");
                        handle.abort();
                    }
                }
            },
            (),
        );
    }

    {
        let active = active.clone();
        use_window_event("scroll", move || active.set(spy_active_section()));
    }

    {
        let active = active.clone();
        use_window_event("resize", move || active.set(spy_active_section()));
    }

    let toggle_menu = {
        let menu = menu.clone();
        use_callback(move |_: (), _| menu.dispatch(MenuAction::Toggle), ())
    };

    let navigate = {
        let menu = menu.clone();
        use_callback(
            move |id: SectionId, _| {
                menu.dispatch(MenuAction::LinkActivated);
                let Some(window) = web_sys::window() else {
                    return;
                };
                let Some(top) = section_top(&window, id) else {
                    warn!("No element with id `{}` to scroll to", id);
                    return;
                };

                let target = scroll_target(top);
                debug!("Navigating to #{} (scroll target {})", id, target);
                navigator
                    .borrow_mut()
                    .navigate(target, window.scroll_y().unwrap_or(0.0), now_ms());

                if frame_loop.borrow().is_none() {
                    let (task, handle) =
                        abortable(run_frames(window, navigator.clone(), frame_loop.clone()));
                    *frame_loop.borrow_mut() = Some(handle);
                    spawn_local(async move {
                        let _ = task.await;
                    });
                }
            },
            (),
        )
    };

    AnchorContext {
        active: *active,
        navigate,
        menu_open: menu.open,
        toggle_menu,
    }
}
