//! Custom cursor dot that follows the pointer.

use portfolio_types::PointerPosition;
use yew::prelude::*;

/// Properties for Cursor component.
#[derive(Properties, PartialEq)]
pub struct CursorProps {
    pub position: PointerPosition,
}

/// Cursor dot component.
#[function_component(Cursor)]
pub fn cursor(props: &CursorProps) -> Html {
    html! {
        <div
            class="cursor fixed w-6 h-6 pointer-events-none z-50 mix-blend-difference"
            style={props.position.cursor_style()}
        >
            <div class="w-full h-full bg-white rounded-full opacity-80"></div>
        </div>
    }
}
