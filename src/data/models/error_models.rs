use diesel::result::Error as DieselError;
use thiserror::Error;
use tokio::task::JoinError;

use crate::config::ConfigError;

// Errors returned to API clients. The display text is the response body.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Parameter '{0}' harus berupa angka positif")]
    InvalidParameter(&'static str),
    #[error("Parameter '{0}' harus diisi")]
    MissingParameter(&'static str),
    #[error("Kata tidak ditemukan")]
    NotFound,
    #[error("Gagal mengambil data")]
    StorageUnavailable(#[source] StoreError),
    #[error("Gagal membaca data")]
    DataCorruption(#[source] StoreError),
    #[error("Parameter permintaan tidak valid")]
    MalformedRequest(String),
    #[error("Endpoint tidak ditemukan")]
    UnknownEndpoint,
    #[error("Metode tidak diizinkan")]
    MethodNotAllowed,
}

// Errors raised while talking to the entry table
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("query failed: {0}")]
    Query(DieselError),
    #[error("row could not be decoded: {0}")]
    Decode(DieselError),
    #[error("storage task failed: {0}")]
    Task(#[from] JoinError),
}

// Fatal errors before the server accepts its first request
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Gagal memuat konfigurasi: {0}")]
    Config(#[from] ConfigError),
    #[error("Gagal terhubung ke database: {0}")]
    Pool(#[source] StoreError),
    #[error("Database tidak dapat dijangkau: {0}")]
    Connectivity(#[source] StoreError),
    #[error("Gagal membuka alamat {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Server berhenti: {0}")]
    Serve(#[source] std::io::Error),
}
