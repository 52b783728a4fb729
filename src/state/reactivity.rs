// ============================================================================
// REACTIVITY - Contenedor de estado con notificaciones a subscribers
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Estado reactivo de una pantalla. Clone comparte la misma celda Y los
/// mismos subscribers, de modo que el clon capturado por una tarea async
/// sigue notificando a la vista original al terminar.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl<T: Clone> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Copia del valor actual
    pub fn snapshot(&self) -> T {
        self.value.borrow().clone()
    }

    /// Reemplazar el valor y notificar
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Mutar el valor en sitio y notificar
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self) {
        // El borrow se suelta antes de invocar: un callback puede leer el estado
        let subscribers: Vec<Rc<dyn Fn()>> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_notifica_a_los_subscribers() {
        let state = ReactiveState::new(0u32);
        let avisos = Rc::new(RefCell::new(0u32));

        let contador = avisos.clone();
        state.subscribe(move || *contador.borrow_mut() += 1);

        state.set(1);
        state.update(|v| *v += 1);

        assert_eq!(state.snapshot(), 2);
        assert_eq!(*avisos.borrow(), 2);
    }

    #[test]
    fn el_clon_comparte_valor_y_subscribers() {
        let state = ReactiveState::new(String::from("idle"));
        let avisos = Rc::new(RefCell::new(0u32));

        let contador = avisos.clone();
        state.subscribe(move || *contador.borrow_mut() += 1);

        // Mismo patrón que un viewmodel: el clon entra a la "tarea async"
        let clon = state.clone();
        clon.set("loading".to_string());

        assert_eq!(state.snapshot(), "loading");
        assert_eq!(*avisos.borrow(), 1);
    }

    #[test]
    fn un_callback_puede_leer_el_estado() {
        let state = ReactiveState::new(5i32);
        let visto = Rc::new(RefCell::new(None));

        let state_lectura = state.clone();
        let visto_escritura = visto.clone();
        state.subscribe(move || {
            *visto_escritura.borrow_mut() = Some(state_lectura.snapshot());
        });

        state.set(7);
        assert_eq!(*visto.borrow(), Some(7));
    }
}
