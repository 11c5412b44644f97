//! HTTP route label helpers.

/// Collapse numeric path segments so every item or cart shares one route label.
pub(super) fn route_label(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut normalised = String::from("/");

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            normalised.push('/');
        }

        if !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()) {
            normalised.push_str("{id}");
        } else {
            normalised.push_str(segment);
        }
    }

    normalised
}

#[cfg(test)]
mod tests {
    use super::route_label;

    #[test]
    fn numeric_segments_become_placeholders() {
        assert_eq!(route_label("/item/42"), "/item/{id}");
        assert_eq!(route_label("/cart/7/add/13"), "/cart/{id}/add/{id}");
    }

    #[test]
    fn static_routes_are_unchanged() {
        assert_eq!(route_label("/"), "/");
        assert_eq!(route_label("/item"), "/item");
        assert_eq!(route_label("/healthcheck"), "/healthcheck");
        assert_eq!(route_label("/item/abc"), "/item/abc");
    }
}
