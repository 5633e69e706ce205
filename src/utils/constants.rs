/// Claves de localStorage (compatibles con la versión web anterior)
pub const STORAGE_KEY_USER: &str = "user";
pub const STORAGE_KEY_ACCESS_TOKEN: &str = "access_token";

/// Id del contenedor del mapa Leaflet
pub const MAP_CONTAINER_ID: &str = "map";

/// user_id que se envía al backend si no se configuró otro
pub const DEFAULT_RECOMMENDATION_USER_ID: &str = "leonidas";
