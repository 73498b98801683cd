#[macro_export]
/// Define an async callback for Yew components.
///
/// Every listed variable is cloned once when the callback is built and again
/// each time it fires, then the body runs inside `wasm_bindgen_futures::spawn_local`.
/// The caller needs `Callback` in scope and a dependency on `wasm-bindgen-futures`.
///
/// ## Without an event parameter
/// ```compile_fail
/// let load: Callback<()> = async_callback!([api, list, on_notify] {
///     let mut next = (*list).clone();
///     next.begin();
///     list.set(next.clone());
///     let notice = next.resolve(api.list_pautas().await);
///     list.set(next);
///     if let Some(notice) = notice {
///         on_notify.emit(notice);
///     }
/// });
/// ```
///
/// ## With an event parameter
/// ```compile_fail
/// let on_submit = async_callback!([api, submitting] |event: SubmitEvent| {
///     event.prevent_default();
///     submitting.set(true);
///     let _ = api.create_pauta(&payload).await;
///     submitting.set(false);
/// });
/// ```
macro_rules! async_callback {
    // Version with event parameter. Matched first: a closure also parses as `expr`.
    ([$($var:ident),* $(,)?] |$event:ident $(: $ty:ty)?| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event $(: $ty)?| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };

    // Version without event parameter
    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |_| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };
}
