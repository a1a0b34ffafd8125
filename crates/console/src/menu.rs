//! Console menu over the inventory's public API.

use std::io::{BufRead, Write};

use stockroom_inventory::{Inventory, ProductUpdate, ProductView};
use tracing::{debug, info};

use crate::prompt::{InputClosed, Prompter};

const MENU: &str = "\n=== Menú ===
1) Agregar producto
2) Eliminar producto
3) Buscar por nombre o descripción
4) Listar todos
5) Actualizar producto
6) Generar informe
7) Ver producto por código
0) Salir";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive inventory session.
#[derive(Debug)]
pub struct Console<R, W> {
    inventory: Inventory,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_inventory(Inventory::new(), input, output)
    }

    pub fn with_inventory(inventory: Inventory, input: R, output: W) -> Self {
        Self {
            inventory,
            prompter: Prompter::new(input, output),
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_parts(self) -> (Inventory, R, W) {
        let (input, output) = self.prompter.into_parts();
        (self.inventory, input, output)
    }

    /// Show the menu and dispatch options until `0` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        info!("console session started");
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(err) if err.downcast_ref::<InputClosed>().is_some() => {
                    debug!("input closed, leaving menu");
                    break;
                }
                Err(err) => return Err(err),
            }
        }
        info!(products = self.inventory.len(), "console session finished");
        Ok(())
    }

    fn step(&mut self) -> anyhow::Result<Flow> {
        self.prompter.say(MENU)?;
        let option: i64 = self.prompter.number_prompted_once("Opción: ")?;
        debug!(option, "menu option selected");

        match option {
            1 => self.add()?,
            2 => self.delete()?,
            3 => self.search()?,
            4 => self.list()?,
            5 => self.update()?,
            6 => self.report()?,
            7 => self.show()?,
            0 => {
                self.prompter.say("Adiós.")?;
                return Ok(Flow::Exit);
            }
            _ => self.prompter.say("Opción inválida.")?,
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> anyhow::Result<()> {
        let code = self.prompter.line(Some("Código: "))?;
        let name = self.prompter.line(Some("Nombre: "))?;
        let description = self.prompter.line(Some("Descripción: "))?;
        let price: f64 = self.prompter.number(Some("Precio: "))?;
        let stock: i64 = self.prompter.number(Some("Stock: "))?;

        let added = self
            .inventory
            .create(code.as_str(), name, description, price, stock);
        self.prompter.say(if added {
            "Agregado."
        } else {
            "No se pudo agregar, código duplicado o inválido."
        })
    }

    fn delete(&mut self) -> anyhow::Result<()> {
        let code = self.prompter.line(Some("Código a eliminar: "))?;
        let deleted = self.inventory.delete(code.as_str());
        self.prompter
            .say(if deleted { "Eliminado." } else { "No existe." })
    }

    fn search(&mut self) -> anyhow::Result<()> {
        let query = self.prompter.line(Some("Texto a buscar: "))?;
        let hits = self.inventory.find_by_text(query.as_str());
        if hits.is_empty() {
            return self.prompter.say("Sin resultados.");
        }
        for product in &hits {
            self.prompter.say(product.render())?;
        }
        Ok(())
    }

    fn list(&mut self) -> anyhow::Result<()> {
        let all = self.inventory.list_all();
        if all.is_empty() {
            return self.prompter.say("Inventario vacío.");
        }
        for product in &all {
            self.prompter.say(product.render())?;
        }
        Ok(())
    }

    fn update(&mut self) -> anyhow::Result<()> {
        let code = self.prompter.line(Some("Código a actualizar: "))?;
        let patch = ProductUpdate {
            name: self.prompter.optional_text("Nuevo nombre: ")?,
            description: self.prompter.optional_text("Nueva descripción: ")?,
            price: self.prompter.optional_number("Nuevo precio: ")?,
            stock: self.prompter.optional_number("Nuevo stock: ")?,
        };

        let updated = self.inventory.update(code.as_str(), patch);
        self.prompter.say(if updated {
            "Actualizado."
        } else {
            "No existe el código."
        })
    }

    fn report(&mut self) -> anyhow::Result<()> {
        let report = self.inventory.report();
        self.prompter.say(report)
    }

    fn show(&mut self) -> anyhow::Result<()> {
        let code = self.prompter.line(Some("Código: "))?;
        let line = self
            .inventory
            .view(code.as_str())
            .map(|product| product.render())
            .unwrap_or_else(|| "No existe.".to_string());
        self.prompter.say(line)
    }
}
