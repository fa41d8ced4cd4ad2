mod tests {
    use tictac_face::message::{
        MESSAGE_KEY_BACKGROUND_COLOR, MESSAGE_KEY_BACKGROUND_ON, Tuple, TupleValue,
    };
    use tictac_face::settings::{DEFAULT_BACKGROUND_COLOR, SettingsError};
    use tictac_face::{
        BackgroundSetting, ConfigMessage, MemoryStorage, Rgb, Storage, StorageError,
    };

    #[test]
    fn test_load_defaults_from_empty_storage() {
        let storage = MemoryStorage::<8>::new();
        let setting = BackgroundSetting::load(&storage);
        assert_eq!(setting.color, DEFAULT_BACKGROUND_COLOR);
        assert_eq!(setting.color, 0x0055FF);
        assert!(!setting.enabled);
    }

    #[test]
    fn test_config_survives_restart() {
        let mut storage = MemoryStorage::<8>::new();
        let mut setting = BackgroundSetting::load(&storage);

        let message = ConfigMessage::new(0xFF0000, true);
        assert_eq!(setting.apply(&message, &mut storage), Ok(()));
        assert_eq!(setting.color, 0xFF0000);
        assert!(setting.enabled);

        let reloaded = BackgroundSetting::load(&storage);
        assert_eq!(reloaded.color, 0xFF0000);
        assert!(reloaded.enabled);
    }

    #[test]
    fn test_partial_message_is_rejected() {
        let mut storage = MemoryStorage::<8>::new();
        let mut setting = BackgroundSetting::load(&storage);
        let before = setting;

        let color_only = ConfigMessage {
            background_color: Some(0xFF0000),
            background_on: None,
        };
        assert_eq!(
            setting.apply(&color_only, &mut storage),
            Err(SettingsError::Incomplete)
        );

        let flag_only = ConfigMessage {
            background_color: None,
            background_on: Some(true),
        };
        assert_eq!(
            setting.apply(&flag_only, &mut storage),
            Err(SettingsError::Incomplete)
        );

        assert_eq!(setting, before);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_load_each_key_independently() {
        let mut storage = MemoryStorage::<8>::new();
        storage.write_bool(MESSAGE_KEY_BACKGROUND_ON, true).unwrap();

        let setting = BackgroundSetting::load(&storage);
        assert_eq!(setting.color, DEFAULT_BACKGROUND_COLOR);
        assert!(setting.enabled);
    }

    #[test]
    fn test_full_storage_still_updates_memory() {
        let mut storage = MemoryStorage::<2>::new();
        storage.write_int(100, 1).unwrap();
        storage.write_int(101, 2).unwrap();

        let mut setting = BackgroundSetting::default();
        let result = setting.apply(&ConfigMessage::new(0x00FF00, true), &mut storage);
        assert_eq!(result, Err(SettingsError::Storage(StorageError::Full)));
        assert_eq!(setting.color, 0x00FF00);
        assert!(!storage.exists(MESSAGE_KEY_BACKGROUND_COLOR));
    }

    #[test]
    fn test_overwrite_existing_key_in_full_storage() {
        let mut storage = MemoryStorage::<2>::new();
        let mut setting = BackgroundSetting::default();
        setting
            .apply(&ConfigMessage::new(0x123456, false), &mut storage)
            .unwrap();
        setting
            .apply(&ConfigMessage::new(0x654321, true), &mut storage)
            .unwrap();

        assert_eq!(storage.len(), 2);
        assert_eq!(storage.read_int(MESSAGE_KEY_BACKGROUND_COLOR), Some(0x654321));
        assert_eq!(storage.read_bool(MESSAGE_KEY_BACKGROUND_ON), Some(true));
    }

    #[test]
    fn test_config_from_tuples() {
        let tuples = [
            Tuple::new(MESSAGE_KEY_BACKGROUND_COLOR, TupleValue::Int32(0xFF0000)),
            Tuple::new(MESSAGE_KEY_BACKGROUND_ON, TupleValue::Int16(1)),
            Tuple::new(42, TupleValue::Uint8(7)),
        ];
        assert_eq!(
            ConfigMessage::from_tuples(&tuples),
            ConfigMessage::new(0xFF0000, true)
        );
    }

    #[test]
    fn test_config_from_tuples_with_other_widths() {
        let tuples = [
            Tuple::new(MESSAGE_KEY_BACKGROUND_ON, TupleValue::Uint8(0)),
            Tuple::new(MESSAGE_KEY_BACKGROUND_COLOR, TupleValue::Uint32(0x00AA55)),
        ];
        assert_eq!(
            ConfigMessage::from_tuples(&tuples),
            ConfigMessage::new(0x00AA55, false)
        );
    }

    #[test]
    fn test_config_from_tuples_missing_flag() {
        let tuples = [Tuple::new(
            MESSAGE_KEY_BACKGROUND_COLOR,
            TupleValue::Int32(0xFF0000),
        )];
        let message = ConfigMessage::from_tuples(&tuples);
        assert_eq!(message.background_color, Some(0xFF0000));
        assert_eq!(message.background_on, None);
    }

    #[test]
    fn test_hand_color_uses_display_palette() {
        let setting = BackgroundSetting::default();
        assert_eq!(setting.hand_color(), Rgb::new(0x00, 0x55, 0xFF));

        let setting = BackgroundSetting {
            color: 0x1260F0,
            enabled: true,
        };
        assert_eq!(setting.hand_color(), Rgb::new(0x00, 0x55, 0xFF));

        let setting = BackgroundSetting {
            color: 0xFF0000,
            enabled: true,
        };
        assert_eq!(setting.hand_color(), Rgb::new(0xFF, 0x00, 0x00));
    }
}
