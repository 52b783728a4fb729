// ============================================================================
// SESSION STORE - Sesión persistida y observable
// ============================================================================
// Instancia única compartida (Clone comparte la misma celda). Toda mutación
// pasa por commit()/clear(): los tres campos se escriben juntos en memoria
// y en localStorage (un solo blob JSON), y después se notifica.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{SessionData, UserType};
use crate::utils::{load_from_storage, remove_from_storage, save_to_storage, STORAGE_KEY_SESSION};

#[derive(Clone)]
pub struct SessionStore {
    data: Rc<RefCell<SessionData>>,
    subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl SessionStore {
    /// Store vacío, sin tocar el storage
    pub fn new() -> Self {
        Self {
            data: Rc::new(RefCell::new(SessionData::default())),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Store restaurando la sesión guardada en localStorage (si existe)
    pub fn restore() -> Self {
        let store = Self::new();
        if let Some(saved) = load_from_storage::<SessionData>(STORAGE_KEY_SESSION) {
            log::info!(
                "💾 Sesión restaurada: id={:?}, tipo={}",
                saved.user_id,
                saved.user_type.as_str()
            );
            *store.data.borrow_mut() = saved;
        }
        store
    }

    /// Commit atómico de la identidad: logged_in + tipo + id, de una vez
    pub fn commit(&self, user_type: UserType, user_id: &str) {
        let session = SessionData::logged_in(user_type, user_id);
        if let Err(e) = save_to_storage(STORAGE_KEY_SESSION, &session) {
            log::error!("❌ Error guardando sesión: {}", e);
        }
        *self.data.borrow_mut() = session;
        self.notify();
    }

    /// Limpiar la sesión (logout)
    pub fn clear(&self) {
        if let Err(e) = remove_from_storage(STORAGE_KEY_SESSION) {
            log::error!("❌ Error limpiando sesión: {}", e);
        }
        *self.data.borrow_mut() = SessionData::default();
        self.notify();
    }

    pub fn snapshot(&self) -> SessionData {
        self.data.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.data.borrow().is_logged_in
    }

    pub fn user_id(&self) -> Option<String> {
        self.data.borrow().user_id.clone()
    }

    pub fn user_type(&self) -> UserType {
        self.data.borrow().user_type
    }

    /// Suscripción de larga vida (la pantalla de perfil observa el user_id)
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self) {
        // Clonar la lista primero: un callback puede volver a leer el store
        let subscribers: Vec<Rc<dyn Fn()>> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
