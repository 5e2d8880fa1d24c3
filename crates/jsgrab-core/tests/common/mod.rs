pub mod js_server;
