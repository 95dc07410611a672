#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    use crate::api::yahoo_dto::ChartResponseDto;

    const TWO_BAR_RESPONSE: &str = r#"{
        "chart": {
            "result": [{
                "meta": {
                    "currency": "USD",
                    "symbol": "AAPL",
                    "exchangeTimezoneName": "America/New_York"
                },
                "timestamp": [1714521600, 1714608000],
                "indicators": {
                    "quote": [{
                        "close": [100.0, 102.5],
                        "volume": [1000, 2500000]
                    }]
                }
            }],
            "error": null
        }
    }"#;

    const NOT_FOUND_RESPONSE: &str = r#"{
        "chart": {
            "result": null,
            "error": {
                "code": "Not Found",
                "description": "No data found, symbol may be delisted"
            }
        }
    }"#;

    #[test]
    fn chart_response_parses_into_bars() {
        let res = serde_json::from_str::<ChartResponseDto>(TWO_BAR_RESPONSE).unwrap();
        let result = res.chart().result().as_ref().unwrap().first().unwrap();
        let bars = result.to_bars();

        assert_eq!(bars.len(), 2);
        assert_eq!(*bars[0].close(), dec!(100.0));
        assert_eq!(*bars[1].close(), dec!(102.5));
        assert_eq!(*bars[1].volume(), 2_500_000);
        assert_eq!(
            *bars[0].timestamp(),
            Utc.timestamp_opt(1_714_521_600, 0).unwrap()
        );
    }

    #[test]
    fn error_body_parses_without_result() {
        let res = serde_json::from_str::<ChartResponseDto>(NOT_FOUND_RESPONSE).unwrap();

        assert!(res.chart().result().is_none());
        assert_eq!(res.chart().error().as_ref().unwrap().code(), "Not Found");
    }

    #[test]
    fn null_close_rows_are_skipped() {
        let body = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1714521600, 1714608000],
                    "indicators": {
                        "quote": [{
                            "close": [null, 102.5],
                            "volume": [null, 2500000]
                        }]
                    }
                }],
                "error": null
            }
        }"#;
        let res = serde_json::from_str::<ChartResponseDto>(body).unwrap();
        let bars = res.chart().result().as_ref().unwrap()[0].to_bars();

        assert_eq!(bars.len(), 1);
        assert_eq!(*bars[0].close(), dec!(102.5));
    }
}
