use crate::application::ViewportController;
use crate::domain::events::ViewportEvent;
use crate::domain::flame_chart::{
    ContentExtent, DeltaMode, ProfileSelection, ResolvedViewport, SelectionStore, TimeRange,
    ViewportConfig, WheelInput,
};
use crate::domain::logging::LogComponent;
use crate::event_utils::{
    DragCapture, EventListenerHandle, EventOptions, event_listener_with_options,
    window_event_listener_with_options,
};
use crate::infrastructure::{AnimationFrameScheduler, DomLayoutSource};
use crate::log_error;
use leptos::html::Div;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, MouseEvent, WheelEvent};

/// Selection store backed by the host's reactive state: reads the current
/// selection signal and writes through the host callback.
pub struct CallbackSelectionStore {
    selection: Signal<ProfileSelection>,
    update: Callback<ProfileSelection>,
}

impl CallbackSelectionStore {
    pub fn new(selection: Signal<ProfileSelection>, update: Callback<ProfileSelection>) -> Self {
        Self { selection, update }
    }
}

impl SelectionStore for CallbackSelectionStore {
    fn selection(&self) -> ProfileSelection {
        self.selection.get_untracked()
    }

    fn update_profile_selection(&self, selection: ProfileSelection) {
        self.update.call(selection);
    }
}

fn wheel_input(event: &WheelEvent) -> WheelInput {
    WheelInput {
        delta_y: event.delta_y(),
        mode: DeltaMode::from_repr(event.delta_mode()).unwrap_or_default(),
        client_x: f64::from(event.client_x()),
    }
}

/// Bind wheel zoom and drag pan on `target` itself rather than through
/// delegated document listeners: the wheel listener must be non-passive, and
/// mouse events of a drag started here must not reach enclosing elements.
/// The listeners live as long as the returned handles.
pub fn bind_viewport_input(
    target: &EventTarget,
    controller: Rc<ViewportController>,
    drag_capture: Rc<RefCell<Option<DragCapture>>>,
) -> Vec<EventListenerHandle> {
    let wheel = {
        let controller = controller.clone();
        event_listener_with_options(target, ev::wheel, &EventOptions::active(), move |event: WheelEvent| {
            if controller.handle_wheel(wheel_input(&event)) {
                event.prevent_default();
            }
        })
    };

    let mouse_down = event_listener_with_options(
        target,
        ev::mousedown,
        &EventOptions::active(),
        move |event: MouseEvent| {
            event.prevent_default();
            event.stop_propagation();
            controller.handle_pointer_down(f64::from(event.client_x()), f64::from(event.client_y()));

            let on_move = {
                let controller = controller.clone();
                move |event: MouseEvent| {
                    event.stop_propagation();
                    controller
                        .handle_pointer_move(f64::from(event.client_x()), f64::from(event.client_y()));
                }
            };
            let on_up = {
                let controller = controller.clone();
                let drag_capture = drag_capture.clone();
                move |event: MouseEvent| {
                    event.stop_propagation();
                    controller.handle_pointer_up();
                    drag_capture.borrow_mut().take();
                }
            };
            *drag_capture.borrow_mut() = Some(DragCapture::new(on_move, on_up));
        },
    );

    vec![wheel, mouse_down]
}

/// Interactive viewport around a flame chart.
///
/// Wheel zooms around the cursor while expanded, dragging pans both axes.
/// Every resolved window is handed to `on_viewport` for the renderer; the
/// horizontal window itself lives in the host's selection and only changes
/// through `update_profile_selection`.
#[component]
pub fn FlameChartViewportPanel(
    #[prop(optional)] config: ViewportConfig,
    #[prop(into)] selection: Signal<ProfileSelection>,
    #[prop(into)] time_range: Signal<TimeRange>,
    #[prop(into)] content: Signal<ContentExtent>,
    #[prop(into)] is_expanded: Signal<bool>,
    #[prop(into)] update_profile_selection: Callback<ProfileSelection>,
    #[prop(optional, into)] on_viewport: Option<Callback<ResolvedViewport>>,
    children: Children,
) -> impl IntoView {
    let store = Rc::new(CallbackSelectionStore::new(selection, update_profile_selection));
    let scheduler = Rc::new(AnimationFrameScheduler::new());
    let controller =
        match ViewportController::new(config, time_range.get_untracked(), store, scheduler) {
            Ok(controller) => controller,
            Err(err) => {
                log_error!(LogComponent::Presentation("FlameChartViewportPanel"), "{}", err);
                return view! { <div class="flameChartViewport collapsed">{err.to_string()}</div> }
                    .into_view();
            }
        };

    let (resolved, set_resolved) = create_signal(controller.resolved());
    controller.subscribe(move |event| {
        if let ViewportEvent::ViewportChanged(viewport) = event {
            set_resolved.set(*viewport);
            if let Some(on_viewport) = on_viewport {
                on_viewport.call(*viewport);
            }
        }
    });

    let container = create_node_ref::<Div>();
    let drag_capture: Rc<RefCell<Option<DragCapture>>> = Rc::new(RefCell::new(None));
    let input: Rc<RefCell<Vec<EventListenerHandle>>> = Rc::new(RefCell::new(Vec::new()));
    {
        let controller = controller.clone();
        let drag_capture = drag_capture.clone();
        let input = input.clone();
        create_effect(move |mounted: Option<bool>| {
            if mounted == Some(true) {
                return true;
            }
            match container.get() {
                Some(element) => {
                    let element: web_sys::Element = (*element).clone().unchecked_into();
                    *input.borrow_mut() =
                        bind_viewport_input(element.as_ref(), controller.clone(), drag_capture.clone());
                    controller.mount(Rc::new(DomLayoutSource::new(element)));
                    true
                }
                None => false,
            }
        });
    }
    {
        let controller = controller.clone();
        create_effect(move |_| {
            controller.receive_props(selection.get(), time_range.get());
        });
    }
    {
        let controller = controller.clone();
        create_effect(move |_| {
            controller.set_content(content.get());
        });
    }
    {
        let controller = controller.clone();
        create_effect(move |_| {
            controller.set_expanded(is_expanded.get());
        });
    }

    let resize = {
        let controller = controller.clone();
        window_event_listener_with_options(ev::resize, &EventOptions::default(), move |_| {
            controller.request_measure();
        })
    };

    {
        let controller = controller.clone();
        on_cleanup(move || {
            input.borrow_mut().clear();
            drag_capture.borrow_mut().take();
            drop(resize);
            controller.teardown();
        });
    }

    view! {
        <div
            node_ref=container
            class=move || resolved.get().class_name()
        >
            {children()}
        </div>
    }
    .into_view()
}
