//! Property-based tests for the single-block cipher.

use blockcipher_core::{
    decrypt_block, encrypt_block, expand_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes,
    mix_columns, shift_rows, sub_bytes, Aes128, Aes128Key, State,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn decrypt_inverts_encrypt(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        let key = Aes128Key::from(key);
        let ct = encrypt_block(&key, &block);
        prop_assert_eq!(decrypt_block(&key, &ct), block);
    }

    #[test]
    fn encrypt_inverts_decrypt(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        let aes = Aes128::new(&Aes128Key::from(key));
        let pt = aes.decrypt_block(&block);
        prop_assert_eq!(aes.encrypt_block(&pt), block);
    }

    #[test]
    fn encryption_is_deterministic(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        let key = Aes128Key::from(key);
        prop_assert_eq!(encrypt_block(&key, &block), encrypt_block(&key, &block));
        prop_assert_eq!(expand_key(&key), expand_key(&key));
    }

    #[test]
    fn different_keys_produce_different_ciphertexts(
        key1 in any::<[u8; 16]>(),
        key2 in any::<[u8; 16]>(),
        block in any::<[u8; 16]>()
    ) {
        prop_assume!(key1 != key2);
        let ct1 = encrypt_block(&Aes128Key::from(key1), &block);
        let ct2 = encrypt_block(&Aes128Key::from(key2), &block);
        prop_assert_ne!(ct1, ct2);
    }

    #[test]
    fn round_transforms_have_inverses(bytes in any::<[u8; 16]>()) {
        let original = State::from_row_major(bytes);
        let mut state = original.clone();
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        inv_mix_columns(&mut state);
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        prop_assert_eq!(state, original);
    }

    #[test]
    fn first_round_key_is_key(key in any::<[u8; 16]>()) {
        let rks = expand_key(&Aes128Key::from(key));
        prop_assert_eq!(rks.get(0), &key);
    }
}
