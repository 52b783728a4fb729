pub mod auth;
pub mod categoria;
pub mod platillo;
pub mod session;
pub mod user;

pub use auth::{
    ComercianteRegisterRequest, ComercianteRegisterResponse, ComercianteResponseWrapper,
    LoginRequest, LoginResponse, StudentRegisterRequest, StudentRegisterResponse,
    StudentResponseWrapper, UserRegisterRequest, UserRegisterResponse, UserResponseWrapper,
};
pub use categoria::{Categoria, CategoriaDto, CategoriasResponse};
pub use platillo::{
    ComidaDto, ComidasResponse, CreatePlatilloRequest, CreatePlatilloResponse,
    CreatePlatilloWrapper, NuevoPlatillo, Platillo,
};
pub use session::{SessionData, UserType};
pub use user::{UserDetail, UserDetailWrapper};
