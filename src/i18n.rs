//! Static English strings looked up by dotted key.

type Section = (&'static str, &'static [(&'static str, &'static str)]);

const EN: &[Section] = &[
	("common", &[("hello", "Hello"), ("hosts", "Hosts"), ("or", "OR")]),
	(
		"auth",
		&[
			("login", "Login"),
			("signup", "Sign Up"),
			("terms5", "By signing up you agree to our"),
		],
	),
	(
		"signin",
		&[
			("signin", "Sign in"),
			("rememberme", "Remember me"),
			("forgotpassword", "Forgot password?"),
			("signup", "Sign up"),
			("logout", "Logout"),
			("username", "Username"),
			("password", "Password"),
			("confirm-password", "Confirm Password"),
			("terms1", "By signing in you agree to our"),
			("terms2", "Terms of Service"),
			("terms3", "and"),
			("terms4", "Privacy Policy"),
			("sso", "Login with SSO"),
			("or", "or"),
		],
	),
	(
		"error",
		&[
			("servermalfunction", "Error server malfunction"),
			(
				"contactyourserveradmin",
				"Contact your server admin or check your network settings",
			),
		],
	),
	(
		"info",
		&[
			("connectmultiplehosts", "Connect multiple hosts"),
			(
				"connectatleasttwohostsonanetworktobegincommunication",
				"Connect at least two hosts on a network to begin communication",
			),
		],
	),
	("hosts", &[("connectahost", "Connect a host")]),
];

/// Looks up `"section.key"`; unknown keys come back unchanged.
pub fn t(key: &str) -> &str {
	lookup(key).unwrap_or(key)
}

fn lookup(key: &str) -> Option<&'static str> {
	let (section, name) = key.split_once('.')?;
	EN.iter()
		.find(|(s, _)| *s == section)?
		.1
		.iter()
		.find(|(k, _)| *k == name)
		.map(|(_, v)| *v)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn resolves_dotted_keys() {
		assert_eq!(t("error.servermalfunction"), "Error server malfunction");
		assert_eq!(t("signin.confirm-password"), "Confirm Password");
		assert_eq!(t("hosts.connectahost"), "Connect a host");
	}

	#[test]
	fn unknown_keys_fall_through() {
		assert_eq!(t("error.nope"), "error.nope");
		assert_eq!(t("nodots"), "nodots");
	}
}
