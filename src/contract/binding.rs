//! ABI of the deployed `MessageStorage` contract

use alloy::sol;

sol! {
    #[sol(rpc)]
    contract MessageStorage {
        function setMessage(string memory message) external;
        function getMessage() external view returns (string memory);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::SolCall;

    #[test]
    fn selectors_match_abi() {
        // keccak256("setMessage(string)")[..4]
        assert_eq!(MessageStorage::setMessageCall::SELECTOR, [0x36, 0x8b, 0x87, 0x72]);
        // keccak256("getMessage()")[..4]
        assert_eq!(MessageStorage::getMessageCall::SELECTOR, [0xce, 0x6d, 0x41, 0xde]);
    }

    #[test]
    fn set_message_encodes_string_argument() {
        let call = MessageStorage::setMessageCall {
            message: "hello".to_string(),
        };
        let data = call.abi_encode();

        // selector + offset word + length word + one padded data word
        assert_eq!(data.len(), 4 + 32 * 3);
        assert_eq!(data[4 + 32 + 31], 5);
        assert_eq!(&data[4 + 64..4 + 64 + 5], b"hello");
    }
}
