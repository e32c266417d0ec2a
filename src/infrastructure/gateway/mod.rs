pub mod pesapal_gateway;
