#[cfg(test)]
mod common;

#[cfg(test)]
mod decoder_tests;

#[cfg(test)]
mod router_tests;

#[cfg(test)]
mod credential_tests;

#[cfg(test)]
mod admin_login_tests;

#[cfg(test)]
mod logout_tests;

#[cfg(test)]
mod payment_tests;

#[cfg(test)]
mod catalog_tests;

#[cfg(test)]
mod persistence_tests;
