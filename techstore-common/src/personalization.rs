use crate::device::DeviceClass;

/// Headline shown for a device class
pub fn personalized_message(device: DeviceClass) -> &'static str {
    match device {
        DeviceClass::Mobile => "Discover our mobile offers",
        DeviceClass::Desktop => "Great discounts on laptops",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_per_device() {
        assert_eq!(
            personalized_message(DeviceClass::Mobile),
            "Discover our mobile offers"
        );
        assert_eq!(
            personalized_message(DeviceClass::Desktop),
            "Great discounts on laptops"
        );
    }
}
