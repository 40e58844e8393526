mod error;
mod helpers;
mod http_check;
mod http_client;
mod http_retry;
mod mail;
