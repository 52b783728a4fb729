pub mod cart_viewmodel;
pub mod create_platillo_viewmodel;
pub mod login_viewmodel;
pub mod main_viewmodel;
pub mod merchant_signup_viewmodel;
pub mod profile_viewmodel;
pub mod signup_viewmodel;
pub mod student_signup_viewmodel;

pub use cart_viewmodel::{CartUiState, CartViewModel};
pub use create_platillo_viewmodel::{
    CreatePlatilloStatus, CreatePlatilloUiState, CreatePlatilloViewModel,
};
pub use login_viewmodel::{LoginUiState, LoginViewModel};
pub use main_viewmodel::{MainUiState, MainViewModel};
pub use merchant_signup_viewmodel::{MerchantSignUpUiState, MerchantSignUpViewModel};
pub use profile_viewmodel::{ProfileUiState, ProfileViewModel};
pub use signup_viewmodel::{SignUpUiState, SignUpViewModel};
pub use student_signup_viewmodel::{StudentSignUpUiState, StudentSignUpViewModel};
