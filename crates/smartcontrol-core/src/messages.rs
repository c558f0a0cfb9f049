//! User-visible texts produced locally rather than by the backend

pub const DEMO_EMAIL: &str = "teste@teste.com";
pub const DEMO_PASSWORD: &str = "123456";

pub const LOGIN_CONNECTION_ERROR: &str = "Erro de conexão com o servidor";
pub const LOGIN_REJECTED: &str = "Falha no login";

pub const TV_NOT_CONNECTED: &str = "TV não conectada! Clique em \"Descobrir TV\" primeiro.";
pub const DISCOVERY_FAILED: &str = "Erro na descoberta";
pub const COMMAND_FAILED: &str = "Erro ao enviar comando";
pub const TV_LIST_FAILED: &str = "Erro ao carregar TVs";
pub const CONNECT_FAILED: &str = "Erro ao conectar TV";
pub const CONNECT_FORM_INCOMPLETE: &str = "Informe o nome e o IP da TV";
