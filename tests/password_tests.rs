//! 密码哈希功能单元测试
//!
//! 测试 Argon2id 密码哈希和验证功能

use mcs_auth::auth::password::PasswordHasher;

#[test]
fn test_password_hash_and_verify() {
    let hasher = PasswordHasher::new();
    let password = "TestPassword123!";

    let hash = hasher.hash(password).expect("Hashing should succeed");

    // 哈希值应该包含 argon2 标识
    assert!(hash.contains("$argon2"));

    // 验证正确密码
    assert!(hasher.verify(password, &hash));
}

#[test]
fn test_password_verify_with_wrong_password() {
    let hasher = PasswordHasher::new();
    let password = "TestPassword123!";

    let hash = hasher.hash(password).expect("Hashing should succeed");

    // 验证错误密码应该失败
    assert!(!hasher.verify("WrongPassword123!", &hash));
}

#[test]
fn test_password_hash_different_each_time() {
    let hasher = PasswordHasher::new();
    let password = "TestPassword123!";

    let hash1 = hasher.hash(password).expect("First hash should succeed");
    let hash2 = hasher.hash(password).expect("Second hash should succeed");

    // 由于随机盐，每次生成的哈希应该不同
    assert_ne!(hash1, hash2, "Hashes should be different due to salt");

    // 但两个哈希都应该能验证同一个密码
    assert!(hasher.verify(password, &hash1));
    assert!(hasher.verify(password, &hash2));
}

#[test]
fn test_password_hash_empty_string() {
    let hasher = PasswordHasher::new();
    let password = "";

    let hash = hasher.hash(password).expect("Empty password should hash");

    // 空密码应该能验证
    assert!(hasher.verify(password, &hash));

    // 非空密码应该验证失败
    assert!(!hasher.verify("password", &hash));
}

#[test]
fn test_password_hash_unicode() {
    let hasher = PasswordHasher::new();
    let password = "密码测试Test123!🔒";

    let hash = hasher.hash(password).expect("Unicode password should hash");

    assert!(hasher.verify(password, &hash));

    // 稍有不同的 Unicode 密码应该失败
    assert!(!hasher.verify("密码测试Test123🔒", &hash));
}

#[test]
fn test_password_verify_with_invalid_hash() {
    let hasher = PasswordHasher::new();
    let password = "TestPassword123!";

    // 无效的哈希格式：返回 false 而不是 panic 或错误
    assert!(!hasher.verify(password, "invalid_hash"));
    assert!(!hasher.verify(password, "$argon2id$v=19$invalid"));
    assert!(!hasher.verify(password, ""));
}

#[test]
fn test_password_hasher_default() {
    let hasher1 = PasswordHasher::default();
    let hasher2 = PasswordHasher::new();

    let password = "TestPassword123!";
    let hash1 = hasher1.hash(password).unwrap();
    let hash2 = hasher2.hash(password).unwrap();

    // 两个不同的 hasher 应该都能正常工作
    assert_ne!(hash1, hash2);
    assert!(hasher1.verify(password, &hash1));
    assert!(hasher2.verify(password, &hash2));
}
