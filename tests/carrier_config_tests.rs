//! Carrier frequency to tick conversion

use fugit_timer::HertzU32;
use ir_remote_tx::config::FREQ_CONV_FACTOR;
use ir_remote_tx::{conversion_factor, CarrierConfig, CarrierError};

#[test]
fn test_reference_conversion_factor() {
    assert_eq!(FREQ_CONV_FACTOR, 8000);
    assert_eq!(conversion_factor(HertzU32::from_raw(16_000_000)), Some(8000));
    assert_eq!(conversion_factor(HertzU32::from_raw(8_000_000)), Some(4000));
}

#[test]
fn test_conversion_factor_too_fast_clock() {
    assert_eq!(
        conversion_factor(HertzU32::from_raw(131_070_000)),
        Some(u16::MAX)
    );
    assert_eq!(conversion_factor(HertzU32::from_raw(131_072_000)), None);
    assert_eq!(conversion_factor(HertzU32::from_raw(200_000_000)), None);
}

#[test]
fn test_quantization_over_supported_range() {
    for khz in 32..=u8::MAX {
        let carrier = CarrierConfig::new(khz).unwrap();
        let period = FREQ_CONV_FACTOR / khz as u16;

        assert_eq!(carrier.period_ticks() as u16, period, "{} kHz", khz);
        assert_eq!(carrier.duty_ticks() as u16, (period * 2) / 3, "{} kHz", khz);
        assert!(carrier.duty_ticks() > 0);
        assert!(carrier.duty_ticks() < carrier.period_ticks());
    }
}

#[test]
fn test_38khz() {
    let carrier = CarrierConfig::new(38).unwrap();
    assert_eq!(carrier.period_ticks(), 210);
    assert_eq!(carrier.duty_ticks(), 140);
    // truncation rounds the carrier up, not down
    assert_eq!(carrier.frequency(FREQ_CONV_FACTOR).to_Hz(), 38_095);
}

#[test]
fn test_36khz() {
    let carrier = CarrierConfig::new(36).unwrap();
    assert_eq!(carrier.period_ticks(), 222);
    assert_eq!(carrier.duty_ticks(), 148);
}

#[test]
fn test_duty_is_two_thirds() {
    assert_eq!(CarrierConfig::new(38).unwrap().duty_percent(), 66);
    assert_eq!(CarrierConfig::new(40).unwrap().duty_percent(), 66);
}

#[test]
fn test_zero_frequency_rejected() {
    assert_eq!(CarrierConfig::new(0), Err(CarrierError::ZeroFrequency));
}

#[test]
fn test_low_frequency_overflows_register() {
    assert_eq!(
        CarrierConfig::new(31),
        Err(CarrierError::PeriodOverflow { period: 258 })
    );
    assert_eq!(
        CarrierConfig::new(1),
        Err(CarrierError::PeriodOverflow { period: 8000 })
    );
}

#[test]
fn test_high_frequency_leaves_no_duty() {
    assert_eq!(
        CarrierConfig::with_conversion_factor(100, 60),
        Err(CarrierError::PeriodTooShort { period: 1 })
    );
    assert_eq!(
        CarrierConfig::with_conversion_factor(100, 200),
        Err(CarrierError::PeriodTooShort { period: 0 })
    );
}

#[test]
fn test_smallest_period() {
    let carrier = CarrierConfig::with_conversion_factor(100, 50).unwrap();
    assert_eq!(carrier.period_ticks(), 2);
    assert_eq!(carrier.duty_ticks(), 1);
}

#[test]
fn test_other_timer_clock() {
    // 8 MHz timer clock
    let carrier = CarrierConfig::with_conversion_factor(4000, 38).unwrap();
    assert_eq!(carrier.period_ticks(), 105);
    assert_eq!(carrier.duty_ticks(), 70);
    assert_eq!(carrier.frequency(4000).to_Hz(), 38_095);
}

#[test]
fn test_error_display() {
    assert_eq!(
        CarrierError::PeriodOverflow { period: 258 }.to_string(),
        "carrier period 258 ticks exceeds 8-bit register"
    );
    assert_eq!(
        CarrierError::ZeroFrequency.to_string(),
        "carrier frequency is zero"
    );
}
