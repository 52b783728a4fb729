// ============================================================================
// APP - Raíz de composición
// ============================================================================
// Comparte el SessionStore entre todas las pantallas (una sola identidad)
// y reparte los viewmodels, como los Factory de cada pantalla.
// ============================================================================

use crate::services::{AuthService, PlatilloService};
use crate::stores::SessionStore;
use crate::viewmodels::{
    CartViewModel, CreatePlatilloViewModel, LoginViewModel, MainViewModel,
    MerchantSignUpViewModel, ProfileViewModel, SignUpViewModel, StudentSignUpViewModel,
};

pub struct App {
    pub session: SessionStore,
    pub auth: AuthService,
    pub platillos: PlatilloService,
    /// El carrito vive lo que vive la app: una sola instancia compartida
    pub cart: CartViewModel,
}

impl App {
    /// Arrancar la app restaurando la sesión guardada (si existe)
    pub fn new() -> Self {
        let session = SessionStore::restore();
        if session.is_logged_in() {
            log::info!("✅ Usuario ya logueado: {:?}", session.user_id());
        }

        Self {
            auth: AuthService::new(session.clone()),
            platillos: PlatilloService::new(),
            cart: CartViewModel::new(),
            session,
        }
    }

    pub fn main_viewmodel(&self) -> MainViewModel {
        MainViewModel::new()
    }

    pub fn login_viewmodel(&self) -> LoginViewModel {
        LoginViewModel::new(self.auth.clone())
    }

    pub fn signup_viewmodel(&self) -> SignUpViewModel {
        SignUpViewModel::new(self.auth.clone())
    }

    pub fn merchant_signup_viewmodel(&self) -> MerchantSignUpViewModel {
        MerchantSignUpViewModel::new(self.auth.clone())
    }

    pub fn student_signup_viewmodel(&self) -> StudentSignUpViewModel {
        StudentSignUpViewModel::new(self.auth.clone())
    }

    pub fn profile_viewmodel(&self) -> ProfileViewModel {
        ProfileViewModel::new(self.auth.clone(), self.session.clone())
    }

    pub fn create_platillo_viewmodel(&self) -> CreatePlatilloViewModel {
        CreatePlatilloViewModel::new()
    }
}
