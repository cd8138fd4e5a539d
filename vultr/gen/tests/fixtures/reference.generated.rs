// @generated by vultr-gen from the Vultr API reference. Do not edit by hand.

//! Typed client for the Vultr API.
//!
//! Construct a [`Vultr`] and call operations through its category fields.
//! Every operation resolves to the decoded JSON response.

#![allow(clippy::too_many_arguments, clippy::upper_case_acronyms)]
#![allow(non_camel_case_types, non_snake_case, unused_imports)]

use std::sync::Arc;

use vultr_rest::{Method, Payload, Rest, RestError, Value};

/// Calls in the `Account` category.
pub struct Account {
	rest: Arc<Rest>,
}

impl Account {
	/// Creates the category over a shared execution shim.
	pub fn new(rest: Arc<Rest>) -> Self {
		Self { rest }
	}

	/// Retrieve information about the current account.
	///
	/// `GET /v1/account/info` (API key required)
	pub async fn info(&self) -> Result<Value, RestError> {
		self.rest.execute("/v1/account/info", true, Method::Get).await
	}
}

/// Calls in the `OperatingSystem` category.
pub struct OperatingSystem {
	rest: Arc<Rest>,
}

impl OperatingSystem {
	/// Creates the category over a shared execution shim.
	pub fn new(rest: Arc<Rest>) -> Self {
		Self { rest }
	}

	/// Retrieve a list of available operating systems.
	///
	/// `GET /v1/os/list` (no API key)
	pub async fn list(&self) -> Result<Value, RestError> {
		self.rest.execute("/v1/os/list", false, Method::Get).await
	}
}

/// Calls in the `Server` category.
pub struct Server {
	rest: Arc<Rest>,
}

impl Server {
	/// Creates the category over a shared execution shim.
	pub fn new(rest: Arc<Rest>) -> Self {
		Self { rest }
	}

	/// List all active or pending virtual machines on the current account.
	///
	/// The "status" field represents the status of the subscription.
	///
	/// `GET /v1/server/list` (API key required)
	///
	/// # Parameters
	///
	/// * `subid` (`integer`, optional) - Unique identifier of a subscription. Only the subscription object will be returned.
	/// * `tag` (`string`, optional) - A tag string. Only subscription objects with this tag will be returned.
	pub async fn list(&self, subid: Option<i64>, tag: Option<&str>) -> Result<Value, RestError> {
		let mut payload = Payload::new();
		if let Some(subid) = subid {
			payload.insert("SUBID", subid);
		}
		if let Some(tag) = tag {
			payload.insert("tag", tag);
		}
		self.rest.execute_with("/v1/server/list", true, Method::Get, payload).await
	}

	/// Set the label of a virtual machine.
	///
	/// `POST /v1/server/label_set` (API key required)
	///
	/// # Parameters
	///
	/// * `subid` (`integer`) - Unique identifier for this subscription. These can be found using the v1/server/list call.
	/// * `label` (`string`, optional) - This is a text label that will be shown in the control panel. It's free-form.
	pub async fn label_set(&self, subid: i64, label: Option<&str>) -> Result<Value, RestError> {
		let mut payload = Payload::from([("SUBID", Value::from(subid))]);
		if let Some(label) = label {
			payload.insert("label", label);
		}
		self.rest.execute_with("/v1/server/label_set", true, Method::Post, payload).await
	}

	/// Create a new virtual machine.
	///
	/// `POST /v1/server/create` (API key required)
	///
	/// # Parameters
	///
	/// * `dcid` (`integer`) - Location to create this virtual machine in.
	/// * `vpsplanid` (`integer`) - Plan to use when creating this virtual machine.
	/// * `osid` (`integer`) - Operating system to use.
	/// * `enable_ipv6` (`string`, optional) - 'yes' or 'no'. If yes, an IPv6 subnet will be assigned.
	/// * `sshkeyid` (`array`, optional) - List of SSH keys to apply to this server on install.
	/// * `notify_activate` (`string`) - (optional, default 'yes') 'yes' or 'no'. If yes, an activation email will be sent.
	pub async fn create(&self, dcid: i64, vpsplanid: i64, osid: i64, enable_ipv6: Option<&str>, sshkeyid: Option<&[String]>, notify_activate: &str) -> Result<Value, RestError> {
		let mut payload = Payload::from([("DCID", Value::from(dcid)), ("VPSPLANID", Value::from(vpsplanid)), ("OSID", Value::from(osid)), ("notify_activate", Value::from(notify_activate))]);
		if let Some(enable_ipv6) = enable_ipv6 {
			payload.insert("enable_ipv6", enable_ipv6);
		}
		if let Some(sshkeyid) = sshkeyid {
			payload.insert("SSHKEYID", sshkeyid);
		}
		self.rest.execute_with("/v1/server/create", true, Method::Post, payload).await
	}

	/// Destroy (delete) a virtual machine.
	///
	/// `POST /v1/server/destroy` (API key required)
	///
	/// # Parameters
	///
	/// * `subid` (`integer`) - Unique identifier for this subscription.
	pub async fn destroy(&self, subid: i64) -> Result<Value, RestError> {
		let payload = Payload::from([("SUBID", Value::from(subid))]);
		self.rest.execute_with("/v1/server/destroy", true, Method::Post, payload).await
	}
}

/// Vultr API client bundling every category over one shared execution shim.
///
/// Changing the API key through [`Self::set_api_key`] affects every category.
pub struct Vultr {
	rest: Arc<Rest>,
	pub account: Account,
	pub os: OperatingSystem,
	pub server: Server,
}

impl Vultr {
	/// Creates a client against the public API endpoint.
	pub fn new(api_key: Option<String>) -> Self {
		Self::with_rest(Rest::new(api_key))
	}

	/// Creates a client over a preconfigured execution shim.
	pub fn with_rest(rest: Rest) -> Self {
		let rest = Arc::new(rest);
		Self {
			account: Account::new(Arc::clone(&rest)),
			os: OperatingSystem::new(Arc::clone(&rest)),
			server: Server::new(Arc::clone(&rest)),
			rest,
		}
	}

	/// Returns the configured API key.
	pub fn api_key(&self) -> Option<String> {
		self.rest.api_key()
	}

	/// Replaces the API key used by subsequent calls.
	pub fn set_api_key(&self, api_key: Option<String>) {
		self.rest.set_api_key(api_key);
	}
}

pub use self::Vultr as Client;
