mod manuf;
mod manuf_csv;
mod oui;
mod release;
