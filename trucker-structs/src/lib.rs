pub mod catalog;
pub mod config;
pub mod report;

#[macro_export]
macro_rules! serializable_struct {
    ( @ $name:ident { } -> ($($fields:tt)*) ) => (
        #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
        pub struct $name {
            $($fields)*
        }
    );
    ( @ $name:ident { $(#[$attr:meta])* $param:ident : $type:ty, $($rest:tt)* } -> ($($fields:tt)*) ) => (
        serializable_struct!(@ $name { $($rest)* } -> (
            $($fields)*
            $(#[$attr])*
            pub $param : $type,
        ));
    );
    ( $name:ident { $( $rest:tt)* } ) => {
        serializable_struct!(@ $name { $($rest)* } -> ());
    };
}
