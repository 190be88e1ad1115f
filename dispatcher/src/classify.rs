use dispatch_core::RejectionReason;

/// How the dispatcher should handle a rejected attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorDisposition {
    /// A same-intent resubmission with a fresh ordering counter may
    /// succeed.
    Retryable,
    /// Resubmission cannot succeed without changing the request itself.
    Fatal,
}

/// Classify a structured rejection.
///
/// The ordering-conflict family is retryable; everything else is fatal.
/// Gas estimation failures are retried only when the endpoint's message
/// shows the counter was stale; some endpoints report a stale counter
/// through estimation rather than as a counter error proper.
pub fn classify(reason: &RejectionReason) -> ErrorDisposition {
    use RejectionReason::*;
    match reason {
        NonceTooLow | NonceExpired | Replaced => ErrorDisposition::Retryable,
        GasEstimationFailed { message } if message.contains("nonce too low") => {
            ErrorDisposition::Retryable
        }
        GasEstimationFailed { .. } | InsufficientFunds | PermissionDenied
        | MalformedPayload(_) | Other(_) => ErrorDisposition::Fatal,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ordering_conflict_family_is_retryable() {
        assert_eq!(classify(&RejectionReason::NonceTooLow), ErrorDisposition::Retryable);
        assert_eq!(classify(&RejectionReason::NonceExpired), ErrorDisposition::Retryable);
        assert_eq!(classify(&RejectionReason::Replaced), ErrorDisposition::Retryable);
    }

    #[test]
    fn stale_counter_reported_through_estimation_is_retryable() {
        let stale = RejectionReason::GasEstimationFailed {
            message: "execution reverted: nonce too low".into(),
        };
        let unrelated = RejectionReason::GasEstimationFailed {
            message: "execution reverted: SafeMath underflow".into(),
        };
        assert_eq!(classify(&stale), ErrorDisposition::Retryable);
        assert_eq!(classify(&unrelated), ErrorDisposition::Fatal);
    }

    #[test]
    fn everything_else_is_fatal() {
        for reason in [
            RejectionReason::InsufficientFunds,
            RejectionReason::PermissionDenied,
            RejectionReason::MalformedPayload("truncated".into()),
            RejectionReason::Other("unknown".into()),
        ] {
            assert_eq!(classify(&reason), ErrorDisposition::Fatal, "{reason}");
        }
    }
}
