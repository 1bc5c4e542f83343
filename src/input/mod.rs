mod text;

use std::{cell::RefCell, fmt, rc::Rc};

use crossterm::event::KeyEvent;

pub use text::TextInput;

/// The concrete editing element a field places in its control wrapper.
pub trait InputView: fmt::Debug {
    fn value(&self) -> String;
    fn set_value(&mut self, value: &str);
    fn focus(&mut self);
    fn blur(&mut self);
    fn is_focused(&self) -> bool;

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let _ = key;
        false
    }

    /// Text shown in the row; masked inputs override this.
    fn display_value(&self) -> String {
        self.value()
    }
}

/// Shared reference to an input view. The concrete field, the controller and
/// the control wrapper may all hold one.
pub type InputHandle = Rc<RefCell<dyn InputView>>;

pub fn shared<I>(input: I) -> Rc<RefCell<I>>
where
    I: InputView + 'static,
{
    Rc::new(RefCell::new(input))
}
