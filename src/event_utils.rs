use leptos::ev::{self, EventDescriptor};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget, MouseEvent};

#[derive(Clone, Debug)]
pub struct EventOptions {
    pub passive: bool,
    pub capture: bool,
    pub once: bool,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self { passive: true, capture: false, once: false }
    }
}

impl EventOptions {
    /// Non-passive, so the handler may call `preventDefault`.
    pub fn active() -> Self {
        Self { passive: false, ..Self::default() }
    }
}

/// A DOM listener that lives exactly as long as this handle.
pub struct EventListenerHandle {
    target: EventTarget,
    event_name: String,
    callback: Closure<dyn FnMut(Event)>,
    capture: bool,
}

impl Drop for EventListenerHandle {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            &self.event_name,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

pub fn event_listener_with_options<E>(
    target: &EventTarget,
    event: E,
    options: &EventOptions,
    mut cb: impl FnMut(E::EventType) + 'static,
) -> EventListenerHandle
where
    E: EventDescriptor + 'static,
    E::EventType: JsCast,
{
    let opts = AddEventListenerOptions::new();
    opts.set_passive(options.passive);
    opts.set_capture(options.capture);
    opts.set_once(options.once);

    let event_name = event.name().into_owned();
    let callback = Closure::wrap(Box::new(move |ev: Event| {
        cb(ev.unchecked_into::<E::EventType>());
    }) as Box<dyn FnMut(Event)>);

    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        &event_name,
        callback.as_ref().unchecked_ref(),
        &opts,
    );

    EventListenerHandle {
        target: target.clone(),
        event_name,
        callback,
        capture: options.capture,
    }
}

pub fn window_event_listener_with_options<E>(
    event: E,
    options: &EventOptions,
    cb: impl FnMut(E::EventType) + 'static,
) -> EventListenerHandle
where
    E: EventDescriptor + 'static,
    E::EventType: JsCast,
{
    let window = gloo::utils::window();
    event_listener_with_options(window.as_ref(), event, options, cb)
}

/// Window-level mousemove / mouseup listeners held for the length of one
/// drag, so the drag keeps tracking when the pointer leaves the panel.
/// Both listeners are removed when the capture is dropped.
pub struct DragCapture {
    _mouse_move: EventListenerHandle,
    _mouse_up: EventListenerHandle,
}

impl DragCapture {
    pub fn new(
        on_move: impl FnMut(MouseEvent) + 'static,
        on_up: impl FnMut(MouseEvent) + 'static,
    ) -> Self {
        let options = EventOptions { passive: false, capture: true, once: false };
        Self {
            _mouse_move: window_event_listener_with_options(ev::mousemove, &options, on_move),
            _mouse_up: window_event_listener_with_options(ev::mouseup, &options, on_up),
        }
    }
}
