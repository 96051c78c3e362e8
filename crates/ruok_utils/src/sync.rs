use std::rc::Rc;

pub trait IntoRc {
    fn into_rc(self) -> Rc<Self>
    where
        Self: Sized,
    {
        Rc::new(self)
    }
}

impl<T> IntoRc for T {}
